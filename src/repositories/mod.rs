//! # Repositories
//!
//! Storage capabilities consumed by the item handlers. Handlers only ever see
//! the traits; the concrete backend is picked at startup from configuration.
//!
//! - [`postgres`] - sqlx-backed repositories over the `items`/`users` tables
//! - [`memory`] - lock-protected maps used by tests and the `memory` backend
//! - [`user`] - authorization predicates over [`User`]

pub mod memory;
pub mod postgres;
pub mod user;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, ItemCreate, ItemUpdate, User};

pub use memory::{InMemoryItemRepository, InMemoryUserRepository};
pub use postgres::{PgItemRepository, PgUserRepository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    /// The row disappeared between lookup and write
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Item storage operations
#[async_trait]
pub trait ItemRepository: Send + Sync + std::fmt::Debug {
    async fn get(&self, id: i64) -> RepositoryResult<Option<Item>>;

    /// Items across all owners, ascending by id
    async fn get_multi(&self, skip: u32, limit: u32) -> RepositoryResult<Vec<Item>>;

    /// Items belonging to `owner_id`, ascending by id
    async fn get_multi_by_owner(
        &self,
        owner_id: i64,
        skip: u32,
        limit: u32,
    ) -> RepositoryResult<Vec<Item>>;

    /// Persist a new item. `owner_id` always wins over anything in the payload.
    async fn create_with_owner(&self, item_in: ItemCreate, owner_id: i64)
        -> RepositoryResult<Item>;

    /// Merge `item_in` onto the stored row for `item.id`
    async fn update(&self, item: &Item, item_in: &ItemUpdate) -> RepositoryResult<Item>;

    /// Delete and return the last stored state
    async fn remove(&self, id: i64) -> RepositoryResult<Item>;

    /// Cheap connectivity check for readiness probes
    async fn ping(&self) -> RepositoryResult<()>;
}

/// User lookups needed to resolve the requesting user
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>>;
}
