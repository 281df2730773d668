//! SVG composition builder for centered chart layouts.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord, xml_escape};

/// Render a `<g>` wrapper around already rendered children.
#[must_use]
pub fn render_group(attributes: &[(&str, String)], children: &[String]) -> String {
    let mut output = String::from("<g");
    for (name, value) in attributes {
        let _ = write!(output, r#" {name}="{}""#, xml_escape(value));
    }
    output.push_str(">\n");
    for child in children {
        for line in child.lines() {
            let _ = writeln!(output, "    {line}");
        }
    }
    output.push_str("</g>");
    output
}

/// Builder for an SVG document whose origin sits at the center of the canvas.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    font_size: Option<f64>,
    font_family: Option<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn centered(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            font_size: None,
            font_family: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_group(mut self, attributes: &[(&str, String)], children: &[String]) -> Self {
        self.elements.push(render_group(attributes, children));
        self
    }

    /// `viewBox` value placing (0, 0) at the middle of the canvas.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            format_coord(-self.width / 2.0),
            format_coord(-self.height / 2.0),
            format_coord(self.width),
            format_coord(self.height)
        )
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}""#,
            format_coord(self.width),
            format_coord(self.height),
            self.view_box()
        );
        if let Some(size) = self.font_size {
            let _ = write!(output, r#" font-size="{}""#, format_coord(size));
        }
        if let Some(family) = &self.font_family {
            let _ = write!(output, r#" font-family="{}""#, xml_escape(family));
        }
        output.push_str(">\n");

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
