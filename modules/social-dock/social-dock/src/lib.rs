//! Social Dock Module Implementation
//!
//! The public API is defined in `social-dock-sdk` and re-exported here.

pub use social_dock_sdk::{
    RenderedWidget, SettingsRecord, SocialAccount, SocialDockApi, SocialDockError,
};

pub mod module;
pub use module::{SocialDockModule, Storage};

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

pub use config::SocialDockConfig;
