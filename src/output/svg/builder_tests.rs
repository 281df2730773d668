//! Tests for SVG composition builder.

use super::*;
use crate::output::svg::element::GroupLabel;

#[test]
fn builder_centers_view_box() {
    let svg = SvgBuilder::centered(600.0, 400.0).build();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="600" height="400""#));
    assert!(svg.contains(r#"viewBox="-300 -200 600 400""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn builder_emits_font_attributes() {
    let svg = SvgBuilder::centered(500.0, 500.0)
        .with_font_size(20.0)
        .with_font_family("sans-serif")
        .build();
    assert!(svg.contains(r#"font-size="20""#));
    assert!(svg.contains(r#"font-family="sans-serif""#));
}

#[test]
fn builder_omits_font_attributes_by_default() {
    let svg = SvgBuilder::centered(10.0, 10.0).build();
    assert!(!svg.contains("font-size"));
    assert!(!svg.contains("font-family"));
}

#[test]
fn builder_indents_pushed_elements() {
    let label = GroupLabel {
        index: 0,
        text: "A".to_string(),
        angle: 1.0,
        radius: 10.0,
    };
    let svg = SvgBuilder::centered(10.0, 10.0).push_element(&label).build();
    assert!(svg.contains("\n    <text"));
}

#[test]
fn group_wraps_children_with_attributes() {
    let group = render_group(
        &[("fill-opacity", "0.67".to_string())],
        &["<path/>".to_string(), "<path/>".to_string()],
    );
    assert_eq!(
        group,
        "<g fill-opacity=\"0.67\">\n    <path/>\n    <path/>\n</g>"
    );
}

#[test]
fn nested_groups_indent_each_level() {
    let inner = render_group(&[], &["<text/>".to_string()]);
    let svg = SvgBuilder::centered(10.0, 10.0)
        .push_group(&[], &[inner])
        .build();
    assert!(svg.contains("\n            <text/>"));
}
