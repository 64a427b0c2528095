use std::sync::Arc;

use serde_json::Value;
use social_dock_sdk::{RenderedWidget, SettingsRecord};
use tracing::{debug, info, warn};

use super::codec::to_blob;
use super::error::DomainError;
use super::render::{render, IconSource};
use super::repo::SettingsRepository;
use super::sanitize::{merge_with_defaults, sanitize};
use super::schema::defaults;

pub struct ServiceConfig {
    /// Storage key of the settings blob.
    pub option_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            option_name: "social_dock_settings".to_owned(),
        }
    }
}

pub struct Service {
    repo: Arc<dyn SettingsRepository>,
    icons: Arc<dyn IconSource>,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(
        repo: Arc<dyn SettingsRepository>,
        icons: Arc<dyn IconSource>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            icons,
            config,
        }
    }

    /// Stored settings merged with defaults; defaults when nothing is stored
    /// or the stored text is not a JSON object.
    ///
    /// # Errors
    /// Returns [`DomainError::Storage`] if the repository fails.
    pub async fn get_settings(&self) -> Result<SettingsRecord, DomainError> {
        let key = self.config.option_name.as_str();
        let Some(text) = self.repo.load(key).await? else {
            debug!(option = key, "No stored settings, serving defaults");
            return Ok(defaults());
        };

        match decode(&text) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(option = key, error = %e, "Ignoring stored settings");
                Ok(defaults())
            }
        }
    }

    /// Normalize a full submission and replace the stored settings with it.
    ///
    /// # Errors
    /// Returns [`DomainError::Storage`] if the record cannot be written.
    pub async fn save_settings(&self, raw: &Value) -> Result<SettingsRecord, DomainError> {
        let record = sanitize(raw);
        self.repo
            .save(&self.config.option_name, &to_blob(&record).to_string())
            .await?;

        info!(
            option = %self.config.option_name,
            design = record.active_design.as_str(),
            position = record.active_position.as_str(),
            accounts = record.social_accounts.len(),
            "Settings saved"
        );
        Ok(record)
    }

    /// Drop the stored settings. Returns `true` if there were any.
    ///
    /// # Errors
    /// Returns [`DomainError::Storage`] if the repository fails.
    pub async fn reset_settings(&self) -> Result<bool, DomainError> {
        let removed = self.repo.delete(&self.config.option_name).await?;
        info!(option = %self.config.option_name, removed, "Settings reset");
        Ok(removed)
    }

    /// # Errors
    /// Returns [`DomainError::Storage`] if the settings cannot be loaded.
    pub async fn render_widget(&self) -> Result<Option<RenderedWidget>, DomainError> {
        let record = self.get_settings().await?;
        let widget = render(&record, self.icons.as_ref());
        if widget.is_none() {
            debug!("No enabled accounts, widget skipped");
        }
        Ok(widget)
    }
}

fn decode(text: &str) -> Result<SettingsRecord, DomainError> {
    let blob: Value = serde_json::from_str(text)
        .map_err(|e| DomainError::corrupted(format!("not valid JSON: {e}")))?;
    if !blob.is_object() {
        return Err(DomainError::corrupted(format!(
            "expected a JSON object, found {}",
            json_kind(&blob)
        )));
    }
    Ok(merge_with_defaults(&blob))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
