//! Primitive SVG elements: group arcs, labels, and ribbons.

use std::f64::consts::PI;

use super::format::{format_coord, xml_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// The outer band segment representing one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupArc {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: ChartColor,
    /// Path data for the annular sector.
    pub path: String,
}

impl SvgElement for GroupArc {
    fn render(&self) -> String {
        let color = self.color.to_css();
        format!(r#"<path fill="{color}" stroke="{color}" d="{}"/>"#, self.path)
    }
}

/// Entity name placed just outside its arc.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLabel {
    pub index: usize,
    pub text: String,
    /// Midpoint angle of the arc, clockwise from 12 o'clock.
    pub angle: f64,
    /// Distance from the center to the text anchor.
    pub radius: f64,
}

impl GroupLabel {
    /// Labels on the left half are turned around so they read upright.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.angle > PI
    }

    #[must_use]
    pub fn anchor(&self) -> TextAnchor {
        if self.is_flipped() {
            TextAnchor::End
        } else {
            TextAnchor::Start
        }
    }

    #[must_use]
    pub fn transform(&self) -> String {
        let degrees = self.angle.to_degrees() - 90.0;
        let mut transform = format!(
            "rotate({}) translate({})",
            format_coord(degrees),
            format_coord(self.radius)
        );
        if self.is_flipped() {
            transform.push_str(" rotate(180)");
        }
        transform
    }
}

impl SvgElement for GroupLabel {
    fn render(&self) -> String {
        let anchor = match self.anchor() {
            TextAnchor::Start => String::new(),
            other => format!(r#" text-anchor="{other}""#),
        };
        format!(
            r#"<text dy=".35em" transform="{}"{anchor}>{}</text>"#,
            self.transform(),
            xml_escape(&self.text)
        )
    }
}

/// Band connecting the source entity's span to the target entity's span.
#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    pub fill: ChartColor,
    pub stroke: ChartColor,
    pub path: String,
}

impl Ribbon {
    #[must_use]
    pub const fn is_self_relationship(&self) -> bool {
        self.source == self.target
    }
}

impl SvgElement for Ribbon {
    fn render(&self) -> String {
        format!(
            r#"<path fill="{}" stroke="{}" d="{}"/>"#,
            self.fill, self.stroke, self.path
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
