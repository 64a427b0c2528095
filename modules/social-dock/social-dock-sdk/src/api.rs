//! `SocialDockApi` trait definition.
//!
//! Consumers (admin UI, public page renderer) talk to the module through this
//! trait and never see storage or transport types.

use async_trait::async_trait;

use crate::errors::SocialDockError;
use crate::models::{RenderedWidget, SettingsRecord};

/// Public API trait for the social-dock module.
#[async_trait]
pub trait SocialDockApi: Send + Sync {
    /// Current settings merged with defaults.
    /// Returns the defaults when nothing has been saved yet.
    async fn get_settings(&self) -> Result<SettingsRecord, SocialDockError>;

    /// Normalize an untrusted submission and store it as the new settings.
    /// Invalid fields never fail the call; they fall back or are dropped.
    async fn save_settings(
        &self,
        input: &serde_json::Value,
    ) -> Result<SettingsRecord, SocialDockError>;

    /// Remove the stored settings. Returns `true` if a record existed.
    async fn reset_settings(&self) -> Result<bool, SocialDockError>;

    /// Markup for the public widget, or `None` when there is nothing to show.
    async fn render_widget(&self) -> Result<Option<RenderedWidget>, SocialDockError>;
}
