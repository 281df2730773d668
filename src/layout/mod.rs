//! Chord diagram layout: radii, angular spans, and path data.

mod chord;
mod geometry;
mod path;

pub use chord::{Chord, ChordLayout, Group, GroupOrder, SelfRelationships, Span};
pub use geometry::{
    ARC_THICKNESS, ChartGeometry, LABEL_MARGIN, LABEL_OFFSET, PAD_ANGLE, RIBBON_OPACITY,
};
pub use path::{arc_path, ribbon_path};
