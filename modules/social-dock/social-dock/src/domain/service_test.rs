#[cfg(test)]
mod tests {
    use super::super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use render::IconSource;
    use serde_json::{json, Value};
    use social_dock_sdk::{Design, Platform, Position, SettingsRecord};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tracing_test::traced_test;

    // Mock repository for testing
    #[derive(Default)]
    struct MockRepository {
        options: Mutex<HashMap<String, String>>,
        fail: bool,
    }

    impl MockRepository {
        fn with(key: &str, value: &Value) -> Self {
            Self::with_text(key, &value.to_string())
        }

        fn with_text(key: &str, text: &str) -> Self {
            let repo = Self::default();
            repo.options.lock().insert(key.to_owned(), text.to_owned());
            repo
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn stored(&self, key: &str) -> Option<Value> {
            let text = self.options.lock().get(key).cloned()?;
            serde_json::from_str(&text).ok()
        }
    }

    #[async_trait]
    impl repo::SettingsRepository for MockRepository {
        async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.options.lock().get(key).cloned())
        }

        async fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            self.options.lock().insert(key.to_owned(), value.to_owned());
            Ok(())
        }

        async fn delete(&self, key: &str) -> anyhow::Result<bool> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.options.lock().remove(key).is_some())
        }
    }

    struct NoIcons;

    impl IconSource for NoIcons {
        fn svg(&self, _platform: Platform) -> Arc<str> {
            Arc::from("")
        }
    }

    const KEY: &str = "social_dock_settings";

    fn create_service(repo: Arc<MockRepository>) -> service::Service {
        service::Service::new(repo, Arc::new(NoIcons), service::ServiceConfig::default())
    }

    #[tokio::test]
    async fn test_get_settings_returns_defaults_when_nothing_stored() {
        let service = create_service(Arc::new(MockRepository::default()));

        let result = service.get_settings().await.unwrap();

        assert_eq!(result, SettingsRecord::default());
    }

    #[tokio::test]
    async fn test_get_settings_merges_partial_blob() {
        let repo = Arc::new(MockRepository::with(
            KEY,
            &json!({"active_design": "design-3", "icon_size": 1000, "mystery": true}),
        ));
        let service = create_service(repo);

        let result = service.get_settings().await.unwrap();

        assert_eq!(result.active_design, Design::Pillar);
        assert_eq!(result.active_position, Position::BottomRight);
        assert_eq!(result.icon_size, 96);
        assert!(result.show_tooltip);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_settings_ignores_non_object_blob() {
        let repo = Arc::new(MockRepository::with(KEY, &json!("a:1:{}")));
        let service = create_service(repo);

        let result = service.get_settings().await.unwrap();

        assert_eq!(result, SettingsRecord::default());
        assert!(logs_contain("Ignoring stored settings"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_settings_ignores_unparsable_text() {
        let repo = Arc::new(MockRepository::with_text(KEY, "a:1:{"));
        let service = create_service(repo);

        let result = service.get_settings().await.unwrap();

        assert_eq!(result, SettingsRecord::default());
        assert!(logs_contain("Ignoring stored settings"));
        assert!(logs_contain("not valid JSON"));

        let widget = service.render_widget().await.unwrap();
        assert!(widget.is_none());
    }

    #[tokio::test]
    async fn test_save_settings_sanitizes_and_persists() {
        let repo = Arc::new(MockRepository::default());
        let service = create_service(repo.clone());

        let saved = service
            .save_settings(&json!({
                "active_design": "design-2",
                "active_position": "bottom-center",
                "icon_spacing": "12",
                "social_accounts": [
                    {"platform": "github", "url": "https://github.com/me", "enabled": "1"},
                    {"platform": "github", "url": "not a url"},
                ],
            }))
            .await
            .unwrap();

        assert_eq!(saved.active_position, Position::BottomCenter);
        assert_eq!(saved.icon_spacing, 12);
        assert!(!saved.show_tooltip);
        assert_eq!(saved.social_accounts.len(), 1);

        let blob = repo.stored(KEY).unwrap();
        assert_eq!(blob["active_design"], "design-2");
        assert_eq!(blob["show_tooltip"], false);

        let reloaded = service.get_settings().await.unwrap();
        assert_eq!(reloaded, saved);
    }

    #[tokio::test]
    async fn test_reset_settings_reports_whether_anything_was_removed() {
        let repo = Arc::new(MockRepository::with(KEY, &json!({})));
        let service = create_service(repo);

        assert!(service.reset_settings().await.unwrap());
        assert!(!service.reset_settings().await.unwrap());
    }

    #[tokio::test]
    async fn test_render_widget_skips_when_no_enabled_accounts() {
        let repo = Arc::new(MockRepository::with(
            KEY,
            &json!({"social_accounts": [
                {"id": "a", "platform": "x", "url": "https://x.com/a", "enabled": false}
            ]}),
        ));
        let service = create_service(repo);

        assert!(service.render_widget().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_render_widget_uses_stored_accounts() {
        let repo = Arc::new(MockRepository::with(
            KEY,
            &json!({"social_accounts": [
                {"id": "a", "platform": "x", "url": "https://x.com/a", "enabled": true}
            ]}),
        ));
        let service = create_service(repo);

        let widget = service.render_widget().await.unwrap().unwrap();

        assert!(widget.markup.contains("social-dock-platform-x"));
    }

    #[tokio::test]
    async fn test_storage_failures_surface_as_domain_errors() {
        let service = create_service(Arc::new(MockRepository::failing()));

        let err = service.get_settings().await.unwrap_err();
        assert!(matches!(err, error::DomainError::Storage(_)));

        let err = service.save_settings(&json!({})).await.unwrap_err();
        assert!(matches!(err, error::DomainError::Storage(_)));
    }
}
