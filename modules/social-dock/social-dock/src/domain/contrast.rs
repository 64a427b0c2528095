use super::coerce::is_hex_color;

/// Foreground for light backgrounds.
pub const DARK_TEXT: &str = "#1e293b";
/// Foreground for dark backgrounds.
pub const LIGHT_TEXT: &str = "#ffffff";

const LUMINANCE_THRESHOLD: f64 = 0.35;

/// Readable foreground for a `#rgb`/`#rrggbb` background.
///
/// Anything that is not a hex color (e.g. `transparent`) gets [`LIGHT_TEXT`].
#[must_use]
pub fn contrast_color(hex: &str) -> &'static str {
    match relative_luminance(hex) {
        Some(l) if l > LUMINANCE_THRESHOLD => DARK_TEXT,
        _ => LIGHT_TEXT,
    }
}

/// WCAG relative luminance in `[0, 1]`, or `None` for malformed input.
#[must_use]
pub fn relative_luminance(hex: &str) -> Option<f64> {
    if !is_hex_color(hex) {
        return None;
    }
    let digits = &hex[1..];
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_owned()
    };

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16)
            .ok()
            .map(|v| linearize(f64::from(v) / 255.0))
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Some(0.2126 * r + 0.7152 * g + 0.0722 * b)
}

fn linearize(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
