use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, EntityTrait};

use crate::domain::repo::SettingsRepository;

use super::entity::{self, Entity as OptionEntity};

/// Settings text stored in the `options` table.
pub struct SeaOrmSettingsRepository {
    db: DatabaseConnection,
}

impl SeaOrmSettingsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        let model = OptionEntity::find_by_id(key.to_owned())
            .one(&self.db)
            .await?;
        Ok(model.map(|m| m.option_value))
    }

    async fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let active_model = entity::ActiveModel {
            option_name: ActiveValue::Set(key.to_owned()),
            option_value: ActiveValue::Set(value.to_owned()),
        };

        OptionEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::OptionName)
                    .update_column(entity::Column::OptionValue)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<bool> {
        let result = OptionEntity::delete_by_id(key.to_owned())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
