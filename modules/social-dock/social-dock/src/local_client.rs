use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use social_dock_sdk::{RenderedWidget, SettingsRecord, SocialDockApi, SocialDockError};

use crate::domain::service::Service;

/// In-process [`SocialDockApi`] backed by the domain service.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SocialDockApi for LocalClient {
    async fn get_settings(&self) -> Result<SettingsRecord, SocialDockError> {
        self.service.get_settings().await.map_err(Into::into)
    }

    async fn save_settings(&self, input: &Value) -> Result<SettingsRecord, SocialDockError> {
        self.service.save_settings(input).await.map_err(Into::into)
    }

    async fn reset_settings(&self) -> Result<bool, SocialDockError> {
        self.service.reset_settings().await.map_err(Into::into)
    }

    async fn render_widget(&self) -> Result<Option<RenderedWidget>, SocialDockError> {
        self.service.render_widget().await.map_err(Into::into)
    }
}
