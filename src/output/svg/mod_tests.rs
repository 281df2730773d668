//! Tests for the public SVG surface.

use super::*;

#[test]
fn reexports_compose_a_document() {
    let color = OrdinalScale::category10().color(0);
    let arc = GroupArc {
        index: 0,
        start_angle: 0.0,
        end_angle: 1.0,
        color,
        path: "M0,0Z".to_string(),
    };
    let svg = SvgBuilder::centered(100.0, 100.0).push_element(&arc).build();
    assert!(svg.contains(&color.to_css()));
    assert!(svg.contains(r#"viewBox="-50 -50 100 100""#));
}
