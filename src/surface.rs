//! The rendered visual tree of a chord diagram.

use crate::layout::RIBBON_OPACITY;
use crate::output::svg::{
    GroupArc, GroupLabel, Ribbon, SvgBuilder, SvgElement, format_coord, render_group,
};

/// Prologue prepended when the surface is serialized as a standalone document.
pub const XML_PROLOGUE: &str = "<?xml version=\"1.0\" standalone=\"no\"?>\r\n";

/// Font family written on the root element so rasterizers pick a face.
const FONT_FAMILY: &str = "sans-serif";

/// Arcs, labels and ribbons of one rendered diagram, in a coordinate system
/// centered on the middle of a `width` × `height` canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSurface {
    width: f64,
    height: f64,
    font_size: f64,
    arcs: Vec<GroupArc>,
    labels: Vec<GroupLabel>,
    ribbons: Vec<Ribbon>,
}

impl DrawingSurface {
    #[must_use]
    pub const fn new(width: f64, height: f64, font_size: f64) -> Self {
        Self {
            width,
            height,
            font_size,
            arcs: Vec::new(),
            labels: Vec::new(),
            ribbons: Vec::new(),
        }
    }

    /// Add one entity's arc together with its label.
    pub fn push_group(&mut self, arc: GroupArc, label: GroupLabel) {
        self.arcs.push(arc);
        self.labels.push(label);
    }

    pub fn push_ribbon(&mut self, ribbon: Ribbon) {
        self.ribbons.push(ribbon);
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub const fn font_size(&self) -> f64 {
        self.font_size
    }

    #[must_use]
    pub fn arcs(&self) -> &[GroupArc] {
        &self.arcs
    }

    #[must_use]
    pub fn labels(&self) -> &[GroupLabel] {
        &self.labels
    }

    #[must_use]
    pub fn ribbons(&self) -> &[Ribbon] {
        &self.ribbons
    }

    /// SVG markup of the surface.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let groups: Vec<String> = self
            .arcs
            .iter()
            .zip(&self.labels)
            .map(|(arc, label)| render_group(&[], &[arc.render(), label.render()]))
            .collect();
        let ribbons: Vec<String> = self.ribbons.iter().map(SvgElement::render).collect();

        SvgBuilder::centered(self.width, self.height)
            .with_font_size(self.font_size)
            .with_font_family(FONT_FAMILY)
            .push_group(&[], &groups)
            .push_group(&[("fill-opacity", format_coord(RIBBON_OPACITY))], &ribbons)
            .build()
    }

    /// Standalone SVG document: [`XML_PROLOGUE`] followed by the markup.
    #[must_use]
    pub fn serialize(&self) -> String {
        format!("{XML_PROLOGUE}{}", self.to_svg())
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
