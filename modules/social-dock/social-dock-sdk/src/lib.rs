//! Social dock SDK
//!
//! This crate provides the public API for the social-dock module:
//! - `SocialDockApi` trait for consumers (admin UI, public page renderer)
//! - Model types (`SettingsRecord`, `SocialAccount`, design/position enums)
//! - Static catalogs (platforms, designs, design/position compatibility)
//! - `AccountListEditor`, the admin-side list model
//! - Error type (`SocialDockError`)

#![forbid(unsafe_code)]

pub mod api;
pub mod catalog;
pub mod editor;
pub mod errors;
pub mod models;

pub use api::SocialDockApi;
pub use catalog::{
    allowed_positions, brand_color, design_catalog, design_compatibility, platform_catalog,
    platform_info, DesignInfo, PlatformInfo, NEUTRAL_SLATE,
};
pub use editor::{
    hidden_fields, AccountField, AccountListEditor, AccountRow, EditorError, SettingsTab,
    FORM_NAMESPACE,
};
pub use errors::SocialDockError;
pub use models::{
    ColorSlot, Design, IconStyle, LinkTarget, Platform, Position, RenderedWidget,
    SettingsRecord, SocialAccount,
};
