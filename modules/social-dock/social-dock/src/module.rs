//! Social dock module definition.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use social_dock_sdk::SocialDockApi;
use tracing::info;

use crate::api::rest::routes;
use crate::config::SocialDockConfig;
use crate::domain::repo::SettingsRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::icons::IconLibrary;
use crate::infra::storage::memory_repo::InMemorySettingsRepository;
use crate::infra::storage::sea_orm_repo::SeaOrmSettingsRepository;
use crate::local_client::LocalClient;

/// Where settings are persisted.
pub enum Storage {
    Database(DatabaseConnection),
    /// Process-local, lost on restart.
    InMemory,
}

/// Social dock module.
///
/// This module provides:
/// - Settings validation and storage for the floating social-icon widget
/// - Widget rendering for public pages
/// - REST API under `/social-dock/v1`
#[derive(Default)]
pub struct SocialDockModule {
    service: ArcSwapOption<Service>,
}

impl SocialDockModule {
    /// Create the options table if needed.
    ///
    /// # Errors
    /// Returns an error if a migration fails.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running social dock database migrations");
        crate::infra::storage::migrations::Migrator::up(db, None).await?;
        Ok(())
    }

    /// Wire repository, icon library and service.
    pub fn init(&self, cfg: &SocialDockConfig, storage: Storage) {
        info!(
            option = %cfg.option_name,
            icons_dir = %cfg.icons_dir,
            "Initializing social dock module"
        );

        let repo: Arc<dyn SettingsRepository> = match storage {
            Storage::Database(db) => Arc::new(SeaOrmSettingsRepository::new(db)),
            Storage::InMemory => Arc::new(InMemorySettingsRepository::new()),
        };
        let icons = Arc::new(IconLibrary::new(&cfg.icons_dir));

        let service = Arc::new(Service::new(
            repo,
            icons,
            ServiceConfig {
                option_name: cfg.option_name.clone(),
            },
        ));
        self.service.store(Some(service));
    }

    fn service(&self) -> anyhow::Result<Arc<Service>> {
        self.service
            .load_full()
            .ok_or_else(|| anyhow::anyhow!("Social dock service not initialized"))
    }

    /// # Errors
    /// Returns an error if [`Self::init`] has not run.
    pub fn register_rest(&self, router: axum::Router) -> anyhow::Result<axum::Router> {
        info!("Registering social dock REST routes");
        Ok(routes::register_routes(router, self.service()?))
    }

    /// In-process client for other components.
    ///
    /// # Errors
    /// Returns an error if [`Self::init`] has not run.
    pub fn client(&self) -> anyhow::Result<Arc<dyn SocialDockApi>> {
        Ok(Arc::new(LocalClient::new(self.service()?)))
    }
}
