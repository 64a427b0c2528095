//! Public models for the social-dock module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the social-dock module and its consumers. Wire and storage shapes
//! live next to their transports and map into these types.

use std::collections::BTreeMap;
use std::fmt;

/// Visual layout variant of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Design {
    /// Quarter-circle trigger in a corner; icons fan out in an arc.
    #[default]
    Orbit,
    /// Horizontal bar with icons in a row.
    Ribbon,
    /// Vertical strip with icons stacked in a column.
    Pillar,
}

impl Design {
    pub const ALL: [Self; 3] = [Self::Orbit, Self::Ribbon, Self::Pillar];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orbit => "design-1",
            Self::Ribbon => "design-2",
            Self::Pillar => "design-3",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == key)
    }
}

/// Placement anchor on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Position {
    BottomLeft,
    #[default]
    BottomRight,
    BottomCenter,
}

impl Position {
    pub const ALL: [Self; 3] = [Self::BottomLeft, Self::BottomRight, Self::BottomCenter];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::BottomCenter => "bottom-center",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BottomLeft => "Bottom Left",
            Self::BottomRight => "Bottom Right",
            Self::BottomCenter => "Bottom Center",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconStyle {
    #[default]
    Rounded,
    Square,
}

impl IconStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Square => "square",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "rounded" => Some(Self::Rounded),
            "square" => Some(Self::Square),
            _ => None,
        }
    }
}

/// Where account links open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinkTarget {
    SameTab,
    #[default]
    NewTab,
}

impl LinkTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameTab => "_self",
            Self::NewTab => "_blank",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "_self" => Some(Self::SameTab),
            "_blank" => Some(Self::NewTab),
            _ => None,
        }
    }
}

/// Supported social network. Declaration order is the catalog display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Instagram,
    Youtube,
    Facebook,
    X,
    Linkedin,
    Tiktok,
    Github,
    Pinterest,
    Telegram,
    Whatsapp,
    Discord,
    Twitch,
    Spotify,
}

impl Platform {
    pub const ALL: [Self; 13] = [
        Self::Instagram,
        Self::Youtube,
        Self::Facebook,
        Self::X,
        Self::Linkedin,
        Self::Tiktok,
        Self::Github,
        Self::Pinterest,
        Self::Telegram,
        Self::Whatsapp,
        Self::Discord,
        Self::Twitch,
        Self::Spotify,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
            Self::X => "x",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::Github => "github",
            Self::Pinterest => "pinterest",
            Self::Telegram => "telegram",
            Self::Whatsapp => "whatsapp",
            Self::Discord => "discord",
            Self::Twitch => "twitch",
            Self::Spotify => "spotify",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a color override: one per platform plus the two widget chrome slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorSlot {
    Platform(Platform),
    TriggerButton,
    WrapperBg,
}

impl ColorSlot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platform(p) => p.as_str(),
            Self::TriggerButton => "trigger_button",
            Self::WrapperBg => "wrapper_bg",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "trigger_button" => Some(Self::TriggerButton),
            "wrapper_bg" => Some(Self::WrapperBg),
            other => Platform::from_key(other).map(Self::Platform),
        }
    }

    /// Every valid slot, platforms first in catalog order.
    pub fn all() -> impl Iterator<Item = Self> {
        Platform::ALL
            .into_iter()
            .map(Self::Platform)
            .chain([Self::TriggerButton, Self::WrapperBg])
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One linked social profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAccount {
    /// Opaque identifier; not guaranteed unique.
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub enabled: bool,
    pub order: u32,
}

/// The site-wide widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRecord {
    pub active_design: Design,
    pub active_position: Position,
    pub icon_size: u32,
    pub icon_spacing: u32,
    pub icon_style: IconStyle,
    pub link_target: LinkTarget,
    pub show_tooltip: bool,
    /// Values are `#rgb`/`#rrggbb`, or `transparent` for [`ColorSlot::WrapperBg`].
    pub platform_colors: BTreeMap<ColorSlot, String>,
    pub social_accounts: Vec<SocialAccount>,
}

impl SettingsRecord {
    pub const ICON_SIZE_MIN: u32 = 24;
    pub const ICON_SIZE_MAX: u32 = 96;
    pub const ICON_SIZE_DEFAULT: u32 = 40;
    pub const ICON_SPACING_MIN: u32 = 0;
    pub const ICON_SPACING_MAX: u32 = 48;
    pub const ICON_SPACING_DEFAULT: u32 = 8;
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            active_design: Design::default(),
            active_position: Position::default(),
            icon_size: Self::ICON_SIZE_DEFAULT,
            icon_spacing: Self::ICON_SPACING_DEFAULT,
            icon_style: IconStyle::default(),
            link_target: LinkTarget::default(),
            show_tooltip: true,
            platform_colors: BTreeMap::new(),
            social_accounts: Vec::new(),
        }
    }
}

/// Front-end output for one page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWidget {
    /// CSS custom properties for the container, to be placed in a `<style>` block.
    pub inline_style: String,
    /// The widget markup, ready to append to the page body.
    pub markup: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_keys_round_trip() {
        for design in Design::ALL {
            assert_eq!(Design::from_key(design.as_str()), Some(design));
        }
        assert_eq!(Design::from_key("design-4"), None);
    }

    #[test]
    fn color_slot_accepts_platforms_and_chrome_slots() {
        assert_eq!(
            ColorSlot::from_key("spotify"),
            Some(ColorSlot::Platform(Platform::Spotify))
        );
        assert_eq!(ColorSlot::from_key("wrapper_bg"), Some(ColorSlot::WrapperBg));
        assert_eq!(ColorSlot::from_key("mastodon"), None);
        assert_eq!(ColorSlot::all().count(), 15);
    }

    #[test]
    fn defaults_match_documented_values() {
        let record = SettingsRecord::default();
        assert_eq!(record.active_design, Design::Orbit);
        assert_eq!(record.active_position, Position::BottomRight);
        assert_eq!(record.icon_size, 40);
        assert_eq!(record.icon_spacing, 8);
        assert_eq!(record.link_target, LinkTarget::NewTab);
        assert!(record.show_tooltip);
        assert!(record.social_accounts.is_empty());
    }
}
