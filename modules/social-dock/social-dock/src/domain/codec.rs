use serde_json::{json, Map, Value};
use social_dock_sdk::{SettingsRecord, SocialAccount};

/// Storage shape of a record. [`super::sanitize::merge_with_defaults`] reads it back.
#[must_use]
pub fn to_blob(record: &SettingsRecord) -> Value {
    let colors: Map<String, Value> = record
        .platform_colors
        .iter()
        .map(|(slot, color)| (slot.as_str().to_owned(), Value::String(color.clone())))
        .collect();
    let accounts: Vec<Value> = record.social_accounts.iter().map(account_blob).collect();

    json!({
        "active_design": record.active_design.as_str(),
        "active_position": record.active_position.as_str(),
        "icon_size": record.icon_size,
        "icon_spacing": record.icon_spacing,
        "icon_style": record.icon_style.as_str(),
        "link_target": record.link_target.as_str(),
        "show_tooltip": record.show_tooltip,
        "platform_colors": colors,
        "social_accounts": accounts,
    })
}

fn account_blob(account: &SocialAccount) -> Value {
    json!({
        "id": account.id,
        "platform": account.platform.as_str(),
        "url": account.url,
        "enabled": account.enabled,
        "order": account.order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sanitize::merge_with_defaults;
    use social_dock_sdk::{ColorSlot, Design, Platform, Position};

    #[test]
    fn blob_reads_back_unchanged() {
        let mut record = SettingsRecord {
            active_design: Design::Pillar,
            active_position: Position::BottomLeft,
            icon_size: 72,
            show_tooltip: false,
            ..SettingsRecord::default()
        };
        record
            .platform_colors
            .insert(ColorSlot::TriggerButton, "#abc".to_owned());
        record.social_accounts.push(SocialAccount {
            id: "gh".to_owned(),
            platform: Platform::Github,
            url: "https://github.com/me".to_owned(),
            enabled: false,
            order: 4,
        });

        let blob = to_blob(&record);
        assert_eq!(blob["platform_colors"]["trigger_button"], "#abc");
        assert_eq!(blob["social_accounts"][0]["order"], 4);
        assert_eq!(merge_with_defaults(&blob), record);
    }
}
