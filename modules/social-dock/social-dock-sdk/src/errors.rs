//! Error types for the social-dock SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SocialDockError {
    #[error("Settings storage unavailable: {message}")]
    Storage { message: String },

    #[error("Internal error")]
    Internal,
}

impl SocialDockError {
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
