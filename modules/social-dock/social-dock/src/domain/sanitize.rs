//! Untrusted input to a schema-conforming [`SettingsRecord`].
//!
//! Both entry points are total: unknown values fall back to defaults, numbers
//! are clamped and unusable entries are dropped. Nothing here returns an error.

use std::collections::BTreeMap;

use serde_json::Value;
use social_dock_sdk::{
    allowed_positions, ColorSlot, Design, IconStyle, LinkTarget, Position, SettingsRecord,
};

use super::accounts::sanitize_accounts;
use super::coerce::{as_text, is_hex_color, is_truthy, to_unsigned};
use super::schema::SettingsFields;

const TRANSPARENT: &str = "transparent";

/// Normalize a submission. A missing `show_tooltip` means the box was unchecked.
#[must_use]
pub fn sanitize(raw: &Value) -> SettingsRecord {
    let show_tooltip = is_truthy(field(raw, SettingsFields::SHOW_TOOLTIP));
    normalize(raw, show_tooltip)
}

/// Decode a stored blob field by field, defaulting whatever is missing or unusable.
#[must_use]
pub fn merge_with_defaults(stored: &Value) -> SettingsRecord {
    let show_tooltip = match field(stored, SettingsFields::SHOW_TOOLTIP) {
        None => SettingsRecord::default().show_tooltip,
        present => is_truthy(present),
    };
    normalize(stored, show_tooltip)
}

fn normalize(raw: &Value, show_tooltip: bool) -> SettingsRecord {
    let defaults = SettingsRecord::default();

    let active_design = text(raw, SettingsFields::ACTIVE_DESIGN)
        .and_then(|key| Design::from_key(&key))
        .unwrap_or(defaults.active_design);

    let requested_position = text(raw, SettingsFields::ACTIVE_POSITION)
        .map_or(Some(defaults.active_position), |key| Position::from_key(&key));
    let active_position = resolve_position(active_design, requested_position);

    let icon_size = field(raw, SettingsFields::ICON_SIZE).map_or(defaults.icon_size, |v| {
        to_unsigned(v).clamp(SettingsRecord::ICON_SIZE_MIN, SettingsRecord::ICON_SIZE_MAX)
    });
    let icon_spacing = field(raw, SettingsFields::ICON_SPACING).map_or(defaults.icon_spacing, |v| {
        to_unsigned(v).clamp(
            SettingsRecord::ICON_SPACING_MIN,
            SettingsRecord::ICON_SPACING_MAX,
        )
    });

    let icon_style = text(raw, SettingsFields::ICON_STYLE)
        .and_then(|key| IconStyle::from_key(&key))
        .unwrap_or(defaults.icon_style);
    let link_target = text(raw, SettingsFields::LINK_TARGET)
        .and_then(|key| LinkTarget::from_key(&key))
        .unwrap_or(defaults.link_target);

    SettingsRecord {
        active_design,
        active_position,
        icon_size,
        icon_spacing,
        icon_style,
        link_target,
        show_tooltip,
        platform_colors: sanitize_colors(field(raw, SettingsFields::PLATFORM_COLORS)),
        social_accounts: sanitize_accounts(field(raw, SettingsFields::SOCIAL_ACCOUNTS)),
    }
}

/// Keep the requested position if the design allows it, else the design's first choice.
#[must_use]
pub fn resolve_position(design: Design, requested: Option<Position>) -> Position {
    let allowed = allowed_positions(design);
    match requested {
        Some(position) if allowed.contains(&position) => position,
        _ => allowed.first().copied().unwrap_or(Position::BottomRight),
    }
}

fn sanitize_colors(raw: Option<&Value>) -> BTreeMap<ColorSlot, String> {
    let Some(Value::Object(map)) = raw else {
        return BTreeMap::new();
    };

    map.iter()
        .filter_map(|(key, value)| {
            let slot = ColorSlot::from_key(key)?;
            let color = value.as_str()?;
            let keep = (slot == ColorSlot::WrapperBg && color == TRANSPARENT) || is_hex_color(color);
            keep.then(|| (slot, color.to_owned()))
        })
        .collect()
}

/// Present and non-null.
fn field<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.as_object()
        .and_then(|map| map.get(key))
        .filter(|v| !v.is_null())
}

fn text(raw: &Value, key: &str) -> Option<String> {
    field(raw, key).and_then(as_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use social_dock_sdk::Platform;

    #[test]
    fn empty_input_yields_defaults_except_tooltip() {
        let record = sanitize(&json!({}));
        assert_eq!(
            record,
            SettingsRecord {
                show_tooltip: false,
                ..SettingsRecord::default()
            }
        );
    }

    #[test]
    fn non_object_input_is_treated_as_empty() {
        assert_eq!(sanitize(&json!("garbage")), sanitize(&json!({})));
        assert_eq!(merge_with_defaults(&json!(null)), SettingsRecord::default());
    }

    #[test]
    fn incompatible_position_falls_back_to_first_allowed() {
        let record = sanitize(&json!({
            "active_design": "design-1",
            "active_position": "bottom-center",
        }));
        assert_eq!(record.active_position, Position::BottomLeft);

        let record = sanitize(&json!({
            "active_design": "design-2",
            "active_position": "top-left",
        }));
        assert_eq!(record.active_position, Position::BottomLeft);
    }

    #[test]
    fn unknown_design_resets_to_orbit() {
        let record = sanitize(&json!({
            "active_design": "design-9",
            "active_position": "bottom-center",
        }));
        assert_eq!(record.active_design, Design::Orbit);
        assert_eq!(record.active_position, Position::BottomLeft);
    }

    #[test]
    fn sizes_are_coerced_and_clamped() {
        let record = sanitize(&json!({"icon_size": "500", "icon_spacing": -3}));
        assert_eq!(record.icon_size, 96);
        assert_eq!(record.icon_spacing, 3);

        let record = sanitize(&json!({"icon_size": "tiny", "icon_spacing": "99"}));
        assert_eq!(record.icon_size, 24);
        assert_eq!(record.icon_spacing, 48);
    }

    #[test]
    fn enum_literals_must_match_exactly() {
        let record = sanitize(&json!({"icon_style": "Square", "link_target": "_self"}));
        assert_eq!(record.icon_style, IconStyle::Rounded);
        assert_eq!(record.link_target, LinkTarget::SameTab);
    }

    #[test]
    fn colors_keep_valid_hex_and_transparent_wrapper() {
        let record = sanitize(&json!({
            "platform_colors": {
                "wrapper_bg": "transparent",
                "instagram": "not-a-color",
                "spotify": "#1db954",
                "trigger_button": "transparent",
                "myspace": "#fff",
            }
        }));

        let expected: BTreeMap<_, _> = [
            (ColorSlot::Platform(Platform::Spotify), "#1db954".to_owned()),
            (ColorSlot::WrapperBg, "transparent".to_owned()),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.platform_colors, expected);
    }

    #[test]
    fn null_fields_count_as_absent() {
        let record = sanitize(&json!({"icon_size": null, "active_position": null}));
        assert_eq!(record.icon_size, SettingsRecord::ICON_SIZE_DEFAULT);
        assert_eq!(record.active_position, Position::BottomRight);
    }

    #[test]
    fn non_map_colors_become_empty() {
        let record = sanitize(&json!({"platform_colors": ["#fff"]}));
        assert!(record.platform_colors.is_empty());
    }

    #[test]
    fn stored_blob_without_tooltip_keeps_default() {
        let record = merge_with_defaults(&json!({"icon_size": 64}));
        assert!(record.show_tooltip);
        assert_eq!(record.icon_size, 64);

        let record = merge_with_defaults(&json!({"show_tooltip": false}));
        assert!(!record.show_tooltip);
    }
}
