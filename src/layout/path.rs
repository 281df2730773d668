//! SVG path data for group arcs and ribbons.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::chord::Chord;
use crate::output::svg::format_coord;

/// Spans this close to a full turn are drawn as a complete ring.
const FULL_TURN_EPSILON: f64 = 1e-6;

/// Point at `radius` and `angle` (clockwise from 12 o'clock) in SVG coordinates.
fn point(radius: f64, angle: f64) -> String {
    format!(
        "{},{}",
        format_coord(radius * angle.sin()),
        format_coord(-radius * angle.cos())
    )
}

/// Clockwise arc command along a circle centered at the origin.
fn arc_to(radius: f64, start: f64, end: f64) -> String {
    let r = format_coord(radius);
    let large_arc = u8::from(end - start > PI);
    format!("A{r},{r} 0 {large_arc},1 {}", point(radius, end))
}

/// Annular sector between `inner` and `outer` from `start` to `end`.
#[must_use]
pub fn arc_path(inner: f64, outer: f64, start: f64, end: f64) -> String {
    if end - start >= TAU - FULL_TURN_EPSILON {
        let (o, i) = (format_coord(outer), format_coord(inner));
        let (neg_o, neg_i) = (format_coord(-outer), format_coord(-inner));
        return format!(
            "M0,{neg_o}A{o},{o} 0 1,1 0,{o}A{o},{o} 0 1,1 0,{neg_o}\
             M0,{neg_i}A{i},{i} 0 1,0 0,{i}A{i},{i} 0 1,0 0,{neg_i}Z"
        );
    }

    let ri = format_coord(inner);
    let large_arc = u8::from(end - start > PI);
    format!(
        "M{}{}L{}A{ri},{ri} 0 {large_arc},0 {}Z",
        point(outer, start),
        arc_to(outer, start, end),
        point(inner, end),
        point(inner, start)
    )
}

/// Ribbon joining a chord's source span to its target span through the center.
#[must_use]
pub fn ribbon_path(radius: f64, chord: &Chord) -> String {
    let source = chord.source;
    let target = chord.target;

    let mut path = format!(
        "M{}{}",
        point(radius, source.start_angle),
        arc_to(radius, source.start_angle, source.end_angle)
    );
    if !chord.is_degenerate() {
        let _ = write!(
            path,
            "Q0,0 {}{}",
            point(radius, target.start_angle),
            arc_to(radius, target.start_angle, target.end_angle)
        );
    }
    let _ = write!(path, "Q0,0 {}Z", point(radius, source.start_angle));
    path
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
