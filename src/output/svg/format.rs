//! Text and number formatting for SVG markup.

/// Escape text for use in SVG element content and attribute values.
///
/// Line breaks become character references so that re-indenting the markup
/// never changes the text.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate with at most three decimals and no trailing zeros.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoids printing "-0" for tiny negative values
    if rounded.abs() < 0.0005 {
        return "0".to_string();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
