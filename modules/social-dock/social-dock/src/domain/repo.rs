use async_trait::async_trait;

/// Key/value option storage. Values are the serialized settings text, stored
/// and returned verbatim; decoding is the service's job.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Insert or replace the text stored under `key`.
    async fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Returns `true` if something was removed.
    async fn delete(&self, key: &str) -> anyhow::Result<bool>;
}
