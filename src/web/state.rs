//! # Web API Application State
//!
//! Shared state handed to every handler: configuration plus the repository
//! handles that stand in for a per-request database session.

use std::sync::Arc;
use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::database::{run_migrations, DatabaseConnection};
use crate::error::Result;
use crate::repositories::{
    InMemoryItemRepository, InMemoryUserRepository, ItemRepository, PgItemRepository,
    PgUserRepository, UserRepository,
};
use crate::services::ItemService;

/// Shared application state for the web API
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    /// Item storage consumed by the item handlers
    pub items: Arc<dyn ItemRepository>,

    /// User lookup consumed by the authentication middleware
    pub users: Arc<dyn UserRepository>,

    pub item_service: ItemService,
}

impl AppState {
    /// Build state from explicit collaborators
    pub fn new(
        config: AppConfig,
        items: Arc<dyn ItemRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            item_service: ItemService::new(items.clone()),
            items,
            users,
        }
    }

    /// Build state for the configured storage backend, connecting to and
    /// migrating Postgres when that backend is selected.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        match config.database.backend {
            StorageBackend::Postgres => {
                let connection = DatabaseConnection::connect(&config.database).await?;
                if config.database.run_migrations {
                    run_migrations(connection.pool()).await?;
                }
                let pool = connection.pool().clone();

                info!(backend = "postgres", "Web API application state created");
                Ok(Self::new(
                    config,
                    Arc::new(PgItemRepository::new(pool.clone())),
                    Arc::new(PgUserRepository::new(pool)),
                ))
            }
            StorageBackend::Memory => {
                let users = InMemoryUserRepository::from_seed(&config.seed_users);

                info!(
                    backend = "memory",
                    seeded_users = config.seed_users.len(),
                    "Web API application state created"
                );
                Ok(Self::new(
                    config,
                    Arc::new(InMemoryItemRepository::new()),
                    Arc::new(users),
                ))
            }
        }
    }

    pub fn default_limit(&self) -> u32 {
        self.config.pagination.default_limit
    }
}
