//! The chord chart component: validate, lay out, draw, export.

use tracing::{debug, warn};

use crate::config::{ChartConfig, validate_chart_config};
use crate::error::{ChordChartError, Result};
use crate::export::{PendingExport, start_export};
use crate::layout::{ChartGeometry, ChordLayout, PAD_ANGLE, arc_path, ribbon_path};
use crate::output::svg::{GroupArc, GroupLabel, OrdinalScale, Ribbon};
use crate::surface::DrawingSurface;
use crate::target::{RenderTarget, SvgDocument};

/// A chord diagram bound to an explicit render target.
///
/// The configuration is fixed at construction and is not validated until
/// [`render`](Self::render) runs.
#[derive(Debug)]
pub struct ChordChart<T: RenderTarget = SvgDocument> {
    target: T,
    config: ChartConfig,
    surface: Option<DrawingSurface>,
}

impl<T: RenderTarget> ChordChart<T> {
    pub const fn new(target: T, config: ChartConfig) -> Self {
        Self {
            target,
            config,
            surface: None,
        }
    }

    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub const fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// The surface produced by the last successful render.
    pub const fn surface(&self) -> Option<&DrawingSurface> {
        self.surface.as_ref()
    }

    /// Validate the configuration, draw the diagram, mount it on the target
    /// and keep it as the current surface.
    ///
    /// # Errors
    /// Returns [`ChordChartError::InvalidConfig`] naming every problem in the
    /// configuration, or the target's error if mounting fails. The previous
    /// surface is kept on failure.
    pub fn render(&mut self) -> Result<&DrawingSurface> {
        if let Err(e) = validate_chart_config(&self.config) {
            warn!(error = %e, "chord chart not rendered");
            return Err(e);
        }

        let surface = draw(&self.config);
        self.target.mount(&surface)?;
        debug!(
            arcs = surface.arcs().len(),
            ribbons = surface.ribbons().len(),
            "rendered chord chart"
        );
        Ok(self.surface.insert(surface))
    }

    /// Start a PNG export of `surface`, or of the current surface when none is
    /// given. `name` overrides the configured file name (without `.png`).
    ///
    /// The surface is snapshotted before this returns, so later renders do not
    /// affect an export already in flight.
    ///
    /// # Errors
    /// Returns [`ChordChartError::NoSurface`] when there is nothing to export,
    /// or a configuration error for an invalid export size or background.
    pub fn save_as_png(
        &self,
        surface: Option<&DrawingSurface>,
        name: Option<&str>,
    ) -> Result<PendingExport> {
        let surface = surface
            .or(self.surface.as_ref())
            .ok_or(ChordChartError::NoSurface)?;

        let mut options = self.config.export.clone();
        if let Some(name) = name {
            options.name = name.to_string();
        }
        debug!(file = %options.name, width = options.width, height = options.height, "starting PNG export");
        start_export(surface, &options)
    }
}

impl ChordChart<SvgDocument> {
    /// Chart drawing into a fresh in-memory document.
    #[must_use]
    pub const fn in_memory(config: ChartConfig) -> Self {
        Self::new(SvgDocument::new(), config)
    }
}

/// Build the surface for a validated configuration.
fn draw(config: &ChartConfig) -> DrawingSurface {
    let geometry = ChartGeometry::new(config.width, config.height);
    let colors = OrdinalScale::category10();
    let layout = ChordLayout::compute(
        &config.matrix,
        PAD_ANGLE,
        config.layout.self_relationships,
        config.layout.group_order,
    );

    let mut surface = DrawingSurface::new(config.width, config.height, config.font_size);

    for group in &layout.groups {
        let color = colors.color(group.index);
        let arc = GroupArc {
            index: group.index,
            start_angle: group.start_angle,
            end_angle: group.end_angle,
            color,
            path: arc_path(
                geometry.inner_radius,
                geometry.arc_outer_radius(),
                group.start_angle,
                group.end_angle,
            ),
        };
        let label = GroupLabel {
            index: group.index,
            text: config
                .name_of(group.index)
                .unwrap_or_default()
                .to_string(),
            angle: group.mid_angle(),
            radius: geometry.label_radius(),
        };
        surface.push_group(arc, label);
    }

    for chord in &layout.chords {
        let color = colors.color(chord.source.index);
        surface.push_ribbon(Ribbon {
            source: chord.source.index,
            target: chord.target.index,
            value: chord.value(),
            fill: color,
            stroke: color.darker(),
            path: ribbon_path(geometry.inner_radius, chord),
        });
    }

    surface
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
