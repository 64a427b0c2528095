//! Lenient scalar coercions for form-shaped input.
//!
//! Form submissions arrive as strings (or are missing entirely), JSON callers
//! send typed values; every helper here accepts both and never fails.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^#([A-Fa-f0-9]{3}){1,2}$").unwrap()
});

static TAGS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?s)<[^>]*>?").unwrap()
});

/// Presence-based truthiness: missing, `null`, `false`, `0`, `"0"`, `""` and
/// empty containers are false; everything else is true.
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !(s.is_empty() || s == "0"),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Non-negative integer from any scalar: absolute value, floats truncated,
/// strings read up to the first non-digit, anything else zero. Saturates at `u32::MAX`.
#[must_use]
pub fn to_unsigned(value: &Value) -> u32 {
    let magnitude: u64 = match value {
        Value::Number(n) => n
            .as_i64()
            .map(i64::unsigned_abs)
            .or_else(|| n.as_u64())
            .or_else(|| n.as_f64().map(float_magnitude))
            .unwrap_or(0),
        Value::String(s) => leading_integer(s),
        Value::Bool(true) => 1,
        _ => 0,
    };
    u32::try_from(magnitude).unwrap_or(u32::MAX)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "saturating float to integer conversion is the intent"
)]
fn float_magnitude(f: f64) -> u64 {
    if f.is_finite() {
        f.abs().trunc() as u64
    } else {
        0
    }
}

fn leading_integer(s: &str) -> u64 {
    let s = s.trim_start();
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    digits
        .chars()
        .take_while(char::is_ascii_digit)
        .fold(0u64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(c.to_digit(10).unwrap_or(0)))
        })
}

/// Scalar rendered as text; containers and `null` have no text form.
#[must_use]
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "" }.to_owned()),
        _ => None,
    }
}

/// Plain single-line text: tags stripped, whitespace collapsed, trimmed.
#[must_use]
pub fn sanitize_text(raw: &str) -> String {
    let without_tags = TAGS.replace_all(raw, "");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `#rgb` or `#rrggbb`.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_presence_rules() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!("0"))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!("1"))));
        assert!(is_truthy(Some(&json!("off"))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(2.5))));
    }

    #[test]
    fn unsigned_coercion_handles_mixed_input() {
        assert_eq!(to_unsigned(&json!(48)), 48);
        assert_eq!(to_unsigned(&json!(-12)), 12);
        assert_eq!(to_unsigned(&json!(31.9)), 31);
        assert_eq!(to_unsigned(&json!("64px")), 64);
        assert_eq!(to_unsigned(&json!("  -7")), 7);
        assert_eq!(to_unsigned(&json!("abc")), 0);
        assert_eq!(to_unsigned(&json!(null)), 0);
        assert_eq!(to_unsigned(&json!([5])), 0);
        assert_eq!(to_unsigned(&json!("99999999999999999999999")), u32::MAX);
    }

    #[test]
    fn text_is_stripped_and_collapsed() {
        assert_eq!(sanitize_text("  <b>git</b>hub \n"), "github");
        assert_eq!(sanitize_text("a \t  b"), "a b");
        assert_eq!(sanitize_text("<script>x"), "x");
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#1DB954"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("1db954"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color("transparent"));
    }
}
