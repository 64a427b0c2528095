use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::repo::SettingsRepository;

/// Process-local option store, used when no database is configured.
#[derive(Default)]
pub struct InMemorySettingsRepository {
    options: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.options.read().get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.options.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.options.write().remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_replaces_and_delete_reports_presence() {
        let repo = InMemorySettingsRepository::new();
        repo.save("k", r#"{"a":1}"#).await.unwrap();
        repo.save("k", r#"{"a":2}"#).await.unwrap();

        assert_eq!(repo.load("k").await.unwrap().as_deref(), Some(r#"{"a":2}"#));
        assert!(repo.delete("k").await.unwrap());
        assert!(!repo.delete("k").await.unwrap());
        assert_eq!(repo.load("k").await.unwrap(), None);
    }
}
