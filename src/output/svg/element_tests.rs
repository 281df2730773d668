//! Tests for primitive SVG elements.

use std::f64::consts::PI;

use super::*;

fn label(angle: f64) -> GroupLabel {
    GroupLabel {
        index: 0,
        text: "core".to_string(),
        angle,
        radius: 152.0,
    }
}

mod group_arc_tests {
    use super::*;

    #[test]
    fn fill_and_stroke_use_entity_color() {
        let arc = GroupArc {
            index: 2,
            start_angle: 0.0,
            end_angle: 1.0,
            color: ChartColor::from_u32(0x2ca02c),
            path: "M0,-146Z".to_string(),
        };
        let svg = arc.render();
        assert_eq!(
            svg,
            r##"<path fill="#2ca02c" stroke="#2ca02c" d="M0,-146Z"/>"##
        );
    }
}

mod group_label_tests {
    use super::*;

    #[test]
    fn right_half_label_is_not_flipped() {
        let label = label(PI / 2.0);
        assert!(!label.is_flipped());
        assert_eq!(label.anchor(), TextAnchor::Start);
        assert_eq!(label.transform(), "rotate(0) translate(152)");
    }

    #[test]
    fn left_half_label_is_flipped_and_end_anchored() {
        let label = label(3.0 * PI / 2.0);
        assert!(label.is_flipped());
        assert_eq!(label.anchor(), TextAnchor::End);
        assert_eq!(label.transform(), "rotate(180) translate(152) rotate(180)");
        assert!(label.render().contains(r#"text-anchor="end""#));
    }

    #[test]
    fn exactly_pi_is_not_flipped() {
        assert!(!label(PI).is_flipped());
    }

    #[test]
    fn render_contains_text_and_baseline_shift() {
        let svg = label(0.5).render();
        assert!(svg.starts_with(r#"<text dy=".35em""#));
        assert!(svg.ends_with(">core</text>"));
        assert!(!svg.contains("text-anchor"));
    }

    #[test]
    fn render_escapes_text() {
        let mut label = label(0.5);
        label.text = "a<b>&c".to_string();
        assert!(label.render().contains(">a&lt;b&gt;&amp;c</text>"));
    }
}

mod ribbon_tests {
    use super::*;

    #[test]
    fn render_uses_fill_and_darker_stroke() {
        let color = ChartColor::from_u32(0x1f77b4);
        let ribbon = Ribbon {
            source: 0,
            target: 1,
            value: 5.0,
            fill: color,
            stroke: color.darker(),
            path: "M0,0Z".to_string(),
        };
        assert_eq!(
            ribbon.render(),
            r##"<path fill="#1f77b4" stroke="#16537e" d="M0,0Z"/>"##
        );
        assert!(!ribbon.is_self_relationship());
    }

    #[test]
    fn same_source_and_target_is_self_relationship() {
        let color = ChartColor::rgb(1, 2, 3);
        let ribbon = Ribbon {
            source: 3,
            target: 3,
            value: 1.0,
            fill: color,
            stroke: color,
            path: String::new(),
        };
        assert!(ribbon.is_self_relationship());
    }
}
