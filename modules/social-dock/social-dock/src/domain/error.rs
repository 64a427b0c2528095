use social_dock_sdk::SocialDockError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Stored settings are unreadable: {message}")]
    Corrupted { message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted {
            message: message.into(),
        }
    }
}

impl From<DomainError> for SocialDockError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Corrupted { .. } => Self::internal(),
            DomainError::Storage(source) => Self::storage(source.to_string()),
        }
    }
}
