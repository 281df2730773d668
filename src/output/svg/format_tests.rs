//! Tests for SVG text formatting.

use super::*;

mod xml_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(xml_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(xml_escape("Vec<u8>"), "Vec&lt;u8&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(xml_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(xml_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn line_breaks_become_character_references() {
        assert_eq!(xml_escape("line1\nline2\r"), "line1&#10;line2&#13;");
    }

    #[test]
    fn leaves_module_paths_alone() {
        assert_eq!(xml_escape("crate::output::svg"), "crate::output::svg");
    }
}

mod format_coord_tests {
    use super::*;

    #[test]
    fn integers_have_no_decimals() {
        assert_eq!(format_coord(250.0), "250");
        assert_eq!(format_coord(-126.0), "-126");
    }

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(format_coord(1.234_56), "1.235");
        assert_eq!(format_coord(0.5), "0.5");
    }

    #[test]
    fn negative_zero_prints_zero() {
        assert_eq!(format_coord(-0.0), "0");
        assert_eq!(format_coord(-0.000_1), "0");
    }
}
