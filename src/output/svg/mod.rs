//! SVG chart generation primitives.
//!
//! Provides the building blocks the chord renderer composes:
//! - a centered, viewBox-based document builder
//! - path, text and ribbon elements
//! - colors and the categorical palette

mod builder;
mod element;
pub(crate) mod format;
mod palette;
mod style;

pub use builder::{SvgBuilder, render_group};
pub use element::{GroupArc, GroupLabel, Ribbon, SvgElement};
pub use format::{format_coord, xml_escape};
pub use palette::{CATEGORY10, OrdinalScale};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
