use social_dock_sdk::{
    brand_color, design_catalog, platform_catalog, ColorSlot, DesignInfo, PlatformInfo,
    SettingsRecord,
};

/// Top-level keys of the settings blob and of the settings form.
pub struct SettingsFields;

impl SettingsFields {
    pub const ACTIVE_DESIGN: &'static str = "active_design";
    pub const ACTIVE_POSITION: &'static str = "active_position";
    pub const ICON_SIZE: &'static str = "icon_size";
    pub const ICON_SPACING: &'static str = "icon_spacing";
    pub const ICON_STYLE: &'static str = "icon_style";
    pub const LINK_TARGET: &'static str = "link_target";
    pub const SHOW_TOOLTIP: &'static str = "show_tooltip";
    pub const PLATFORM_COLORS: &'static str = "platform_colors";
    pub const SOCIAL_ACCOUNTS: &'static str = "social_accounts";
}

/// Keys of one entry in `social_accounts`.
pub struct AccountFields;

impl AccountFields {
    pub const ID: &'static str = "id";
    pub const PLATFORM: &'static str = "platform";
    pub const URL: &'static str = "url";
    pub const ENABLED: &'static str = "enabled";
    pub const ORDER: &'static str = "order";
}

/// The record served before anything has been saved.
#[must_use]
pub fn defaults() -> SettingsRecord {
    SettingsRecord::default()
}

/// Everything an editor needs to draw its pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub platforms: &'static [PlatformInfo],
    pub designs: &'static [DesignInfo],
    /// Every color slot with the color used when no override is set.
    pub color_slots: Vec<(ColorSlot, &'static str)>,
}

#[must_use]
pub fn catalog() -> Catalog {
    Catalog {
        platforms: platform_catalog(),
        designs: design_catalog(),
        color_slots: ColorSlot::all().map(|slot| (slot, brand_color(slot))).collect(),
    }
}
