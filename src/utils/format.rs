//! Formatting helpers for display values.

/// Convert a `#rrggbb` hex color to an `rgba(r, g, b, a)` string.
///
/// A malformed color is returned unchanged so the browser can fall back to
/// its own parsing (or ignore the declaration) instead of rendering a NaN
/// channel.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    // Byte length and ASCII together make the fixed-range slices safe.
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 && d.is_ascii() => d,
        _ => return hex.to_string(),
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => hex.to_string(),
    }
}

/// Inline style for a colored tag chip: translucent background, full-color
/// text, matching the card design.
pub fn tag_chip_style(color: &str) -> String {
    format!(
        "background-color: {}; color: {};",
        hex_to_rgba(color, crate::config::TAG_BG_ALPHA),
        color
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#4a90e2", 0.2), "rgba(74, 144, 226, 0.2)");
        assert_eq!(hex_to_rgba("#000000", 1.0), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn malformed_colors_pass_through() {
        assert_eq!(hex_to_rgba("red", 0.2), "red");
        assert_eq!(hex_to_rgba("#fff", 0.2), "#fff");
        assert_eq!(hex_to_rgba("#zzzzzz", 0.2), "#zzzzzz");
        // Six bytes but not six ASCII hex digits; must not slice mid-char.
        assert_eq!(hex_to_rgba("#aébcd", 0.2), "#aébcd");
    }

    #[test]
    fn chip_style_uses_translucent_background() {
        let style = tag_chip_style("#4a90e2");
        assert!(style.contains("rgba(74, 144, 226,"));
        assert!(style.ends_with("color: #4a90e2;"));
    }
}
