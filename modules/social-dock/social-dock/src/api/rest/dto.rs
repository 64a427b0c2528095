use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use social_dock_sdk::{DesignInfo, PlatformInfo, Position, SettingsRecord, SocialAccount};

use crate::domain::schema::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SettingsDto {
    pub active_design: String,
    pub active_position: String,
    pub icon_size: u32,
    pub icon_spacing: u32,
    pub icon_style: String,
    pub link_target: String,
    pub show_tooltip: bool,
    pub platform_colors: BTreeMap<String, String>,
    pub social_accounts: Vec<SocialAccountDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SocialAccountDto {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub enabled: bool,
    pub order: u32,
}

impl From<&SocialAccount> for SocialAccountDto {
    fn from(account: &SocialAccount) -> Self {
        Self {
            id: account.id.clone(),
            platform: account.platform.as_str().to_owned(),
            url: account.url.clone(),
            enabled: account.enabled,
            order: account.order,
        }
    }
}

impl From<SettingsRecord> for SettingsDto {
    fn from(record: SettingsRecord) -> Self {
        Self {
            active_design: record.active_design.as_str().to_owned(),
            active_position: record.active_position.as_str().to_owned(),
            icon_size: record.icon_size,
            icon_spacing: record.icon_spacing,
            icon_style: record.icon_style.as_str().to_owned(),
            link_target: record.link_target.as_str().to_owned(),
            show_tooltip: record.show_tooltip,
            platform_colors: record
                .platform_colors
                .into_iter()
                .map(|(slot, color)| (slot.as_str().to_owned(), color))
                .collect(),
            social_accounts: record
                .social_accounts
                .iter()
                .map(SocialAccountDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformDto {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub brand_color: &'static str,
}

impl From<&PlatformInfo> for PlatformDto {
    fn from(info: &PlatformInfo) -> Self {
        Self {
            key: info.platform.as_str(),
            label: info.label,
            icon: info.icon,
            brand_color: info.brand_color,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionDto {
    pub key: &'static str,
    pub label: &'static str,
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        Self {
            key: position.as_str(),
            label: position.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignDto {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub positions: Vec<PositionDto>,
}

impl From<&DesignInfo> for DesignDto {
    fn from(info: &DesignInfo) -> Self {
        Self {
            id: info.design.as_str(),
            label: info.label,
            description: info.description,
            positions: info.positions.iter().copied().map(PositionDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorSlotDto {
    pub key: &'static str,
    pub default_color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogDto {
    pub platforms: Vec<PlatformDto>,
    pub designs: Vec<DesignDto>,
    pub color_slots: Vec<ColorSlotDto>,
}

impl From<Catalog> for CatalogDto {
    fn from(catalog: Catalog) -> Self {
        Self {
            platforms: catalog.platforms.iter().map(PlatformDto::from).collect(),
            designs: catalog.designs.iter().map(DesignDto::from).collect(),
            color_slots: catalog
                .color_slots
                .into_iter()
                .map(|(slot, default_color)| ColorSlotDto {
                    key: slot.as_str(),
                    default_color,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContrastQuery {
    pub hex: String,
}

#[derive(Debug, Serialize)]
pub struct ContrastDto {
    pub background: String,
    pub foreground: &'static str,
}
