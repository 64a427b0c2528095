//! Static catalogs: supported platforms, designs and the design/position table.

use crate::models::{ColorSlot, Design, Platform, Position};

/// Fallback color for anything without a brand color.
pub const NEUTRAL_SLATE: &str = "#1e293b";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub label: &'static str,
    /// File name of the SVG glyph inside the icons directory.
    pub icon: &'static str,
    pub brand_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignInfo {
    pub design: Design,
    pub label: &'static str,
    pub description: &'static str,
    pub positions: &'static [Position],
}

const PLATFORMS: [PlatformInfo; 13] = [
    PlatformInfo {
        platform: Platform::Instagram,
        label: "Instagram",
        icon: "instagram.svg",
        brand_color: "#E4405F",
    },
    PlatformInfo {
        platform: Platform::Youtube,
        label: "YouTube",
        icon: "youtube.svg",
        brand_color: "#FF0000",
    },
    PlatformInfo {
        platform: Platform::Facebook,
        label: "Facebook",
        icon: "facebook.svg",
        brand_color: "#1877F2",
    },
    PlatformInfo {
        platform: Platform::X,
        label: "X (Twitter)",
        icon: "x-twitter.svg",
        brand_color: "#000000",
    },
    PlatformInfo {
        platform: Platform::Linkedin,
        label: "LinkedIn",
        icon: "linkedin.svg",
        brand_color: "#0A66C2",
    },
    PlatformInfo {
        platform: Platform::Tiktok,
        label: "TikTok",
        icon: "tiktok.svg",
        brand_color: "#000000",
    },
    PlatformInfo {
        platform: Platform::Github,
        label: "GitHub",
        icon: "github.svg",
        brand_color: "#181717",
    },
    PlatformInfo {
        platform: Platform::Pinterest,
        label: "Pinterest",
        icon: "pinterest.svg",
        brand_color: "#BD081C",
    },
    PlatformInfo {
        platform: Platform::Telegram,
        label: "Telegram",
        icon: "telegram.svg",
        brand_color: "#26A5E4",
    },
    PlatformInfo {
        platform: Platform::Whatsapp,
        label: "WhatsApp",
        icon: "whatsapp.svg",
        brand_color: "#25D366",
    },
    PlatformInfo {
        platform: Platform::Discord,
        label: "Discord",
        icon: "discord.svg",
        brand_color: "#5865F2",
    },
    PlatformInfo {
        platform: Platform::Twitch,
        label: "Twitch",
        icon: "twitch.svg",
        brand_color: "#9146FF",
    },
    PlatformInfo {
        platform: Platform::Spotify,
        label: "Spotify",
        icon: "spotify.svg",
        brand_color: "#1DB954",
    },
];

const ORBIT_POSITIONS: [Position; 2] = [Position::BottomLeft, Position::BottomRight];
const RIBBON_POSITIONS: [Position; 3] = [
    Position::BottomLeft,
    Position::BottomRight,
    Position::BottomCenter,
];
const PILLAR_POSITIONS: [Position; 2] = [Position::BottomLeft, Position::BottomRight];

const DESIGNS: [DesignInfo; 3] = [
    DesignInfo {
        design: Design::Orbit,
        label: "Orbit",
        description: "Quarter circle trigger in a corner. Icons fan out in an arc on hover or click.",
        positions: &ORBIT_POSITIONS,
    },
    DesignInfo {
        design: Design::Ribbon,
        label: "Ribbon",
        description: "Horizontal bar at the bottom of the page with icons in a row.",
        positions: &RIBBON_POSITIONS,
    },
    DesignInfo {
        design: Design::Pillar,
        label: "Pillar",
        description: "Vertical sidebar strip with icons stacked in a column.",
        positions: &PILLAR_POSITIONS,
    },
];

/// All supported platforms in display order.
#[must_use]
pub fn platform_catalog() -> &'static [PlatformInfo] {
    &PLATFORMS
}

#[must_use]
pub fn platform_info(platform: Platform) -> &'static PlatformInfo {
    // PLATFORMS is declared in Platform::ALL order.
    &PLATFORMS[platform as usize]
}

/// All designs with their labels and allowed positions.
#[must_use]
pub fn design_catalog() -> &'static [DesignInfo] {
    &DESIGNS
}

/// Positions a design may be placed at, in preference order.
#[must_use]
pub fn allowed_positions(design: Design) -> &'static [Position] {
    DESIGNS
        .iter()
        .find(|d| d.design == design)
        .map(|d| d.positions)
        .unwrap_or_default()
}

/// The full design → positions table.
#[must_use]
pub fn design_compatibility() -> Vec<(Design, &'static [Position])> {
    DESIGNS.iter().map(|d| (d.design, d.positions)).collect()
}

/// Default background for a color slot.
#[must_use]
pub fn brand_color(slot: ColorSlot) -> &'static str {
    match slot {
        ColorSlot::Platform(p) => platform_info(p).brand_color,
        ColorSlot::TriggerButton | ColorSlot::WrapperBg => NEUTRAL_SLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_platform_enum() {
        for (info, platform) in platform_catalog().iter().zip(Platform::ALL) {
            assert_eq!(info.platform, platform);
        }
        assert_eq!(platform_catalog().len(), 13);
    }

    #[test]
    fn compatibility_table_contents() {
        assert_eq!(
            allowed_positions(Design::Orbit),
            &[Position::BottomLeft, Position::BottomRight]
        );
        assert_eq!(
            allowed_positions(Design::Ribbon),
            &[
                Position::BottomLeft,
                Position::BottomRight,
                Position::BottomCenter
            ]
        );
        assert_eq!(
            allowed_positions(Design::Pillar),
            &[Position::BottomLeft, Position::BottomRight]
        );
    }

    #[test]
    fn compatibility_table_covers_every_design_once() {
        let table = design_compatibility();
        let designs: Vec<Design> = table.iter().map(|(d, _)| *d).collect();
        assert_eq!(designs, [Design::Orbit, Design::Ribbon, Design::Pillar]);
        for (design, positions) in table {
            assert_eq!(positions, allowed_positions(design));
            assert!(!positions.is_empty());
        }
    }

    #[test]
    fn brand_colors_for_chrome_slots_are_slate() {
        assert_eq!(brand_color(ColorSlot::TriggerButton), NEUTRAL_SLATE);
        assert_eq!(brand_color(ColorSlot::WrapperBg), NEUTRAL_SLATE);
        assert_eq!(
            brand_color(ColorSlot::Platform(Platform::Spotify)),
            "#1DB954"
        );
    }

    #[test]
    fn x_uses_dedicated_icon_file() {
        assert_eq!(platform_info(Platform::X).icon, "x-twitter.svg");
        assert_eq!(platform_info(Platform::X).label, "X (Twitter)");
    }
}
