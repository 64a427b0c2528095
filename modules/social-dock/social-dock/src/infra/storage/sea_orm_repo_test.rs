#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::domain::repo::SettingsRepository;
    use sea_orm::{ActiveValue, Database, DatabaseConnection, EntityTrait};
    use sea_orm_migration::MigratorTrait;

    async fn create_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migrations::Migrator::up(&db, None).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_load_missing_option_returns_none() {
        let repo = sea_orm_repo::SeaOrmSettingsRepository::new(create_test_db().await);

        assert!(repo.load("social_dock_settings").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_upserts_text() {
        let db = create_test_db().await;
        let repo = sea_orm_repo::SeaOrmSettingsRepository::new(db.clone());

        repo.save("social_dock_settings", r#"{"icon_size":40}"#)
            .await
            .unwrap();
        repo.save("social_dock_settings", r#"{"icon_size":64}"#)
            .await
            .unwrap();

        let rows = entity::Entity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].option_value, r#"{"icon_size":64}"#);
        assert_eq!(
            repo.load("social_dock_settings").await.unwrap().as_deref(),
            Some(r#"{"icon_size":64}"#)
        );
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let repo = sea_orm_repo::SeaOrmSettingsRepository::new(create_test_db().await);
        repo.save("social_dock_settings", "{}").await.unwrap();

        assert!(repo.delete("social_dock_settings").await.unwrap());
        assert!(!repo.delete("social_dock_settings").await.unwrap());
    }

    #[tokio::test]
    async fn test_options_are_isolated_by_name() {
        let repo = sea_orm_repo::SeaOrmSettingsRepository::new(create_test_db().await);
        repo.save("site_a", r#"{"active_design":"design-2"}"#)
            .await
            .unwrap();

        assert!(repo.load("site_b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_json_text_is_returned_verbatim() {
        let db = create_test_db().await;
        entity::Entity::insert(entity::ActiveModel {
            option_name: ActiveValue::Set("social_dock_settings".to_owned()),
            option_value: ActiveValue::Set("a:1:{".to_owned()),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();
        let repo = sea_orm_repo::SeaOrmSettingsRepository::new(db);

        let text = repo.load("social_dock_settings").await.unwrap();
        assert_eq!(text.as_deref(), Some("a:1:{"));
    }
}
