//! Fixed radii and spacing of the chord diagram.

/// Space reserved between the outer edge of the surface and the ring for labels.
pub const LABEL_MARGIN: f64 = 124.0;

/// Radial thickness of the group arcs.
pub const ARC_THICKNESS: f64 = 20.0;

/// Distance from the inner radius to the label anchor.
pub const LABEL_OFFSET: f64 = 26.0;

/// Angular gap between adjacent groups, in radians.
pub const PAD_ANGLE: f64 = 0.04;

/// Fill opacity of the ribbon layer.
pub const RIBBON_OPACITY: f64 = 0.67;

/// Radii derived from the surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let outer_radius = width.min(height) * 0.5;
        Self {
            outer_radius,
            inner_radius: outer_radius - LABEL_MARGIN,
        }
    }

    /// Outer edge of the group arcs.
    #[must_use]
    pub fn arc_outer_radius(&self) -> f64 {
        self.inner_radius + ARC_THICKNESS
    }

    #[must_use]
    pub fn label_radius(&self) -> f64 {
        self.inner_radius + LABEL_OFFSET
    }

    /// Whether the ring has any room left inside the label margin.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.inner_radius > 0.0
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
