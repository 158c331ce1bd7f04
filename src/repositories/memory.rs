//! In-process repositories backed by `parking_lot` locks.
//!
//! Ordering matches the Postgres backend (ascending id) so tests written
//! against one hold for the other.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};

use super::{ItemRepository, RepositoryError, RepositoryResult, UserRepository};
use crate::config::SeedUser;
use crate::models::{Item, ItemCreate, ItemUpdate, User};

#[derive(Debug)]
pub struct InMemoryItemRepository {
    items: RwLock<BTreeMap<i64, Item>>,
    next_id: AtomicI64,
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert an item with a fixed id. Later creates get ids past it.
    pub fn seed(&self, item: Item) {
        self.next_id.fetch_max(item.id + 1, Ordering::SeqCst);
        self.items.write().insert(item.id, item);
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn page<'a>(
        items: impl Iterator<Item = &'a Item>,
        skip: u32,
        limit: u32,
    ) -> Vec<Item> {
        items
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get(&self, id: i64) -> RepositoryResult<Option<Item>> {
        Ok(self.items.read().get(&id).cloned())
    }

    async fn get_multi(&self, skip: u32, limit: u32) -> RepositoryResult<Vec<Item>> {
        Ok(Self::page(self.items.read().values(), skip, limit))
    }

    async fn get_multi_by_owner(
        &self,
        owner_id: i64,
        skip: u32,
        limit: u32,
    ) -> RepositoryResult<Vec<Item>> {
        let items = self.items.read();
        Ok(Self::page(
            items.values().filter(|item| item.owner_id == owner_id),
            skip,
            limit,
        ))
    }

    async fn create_with_owner(
        &self,
        item_in: ItemCreate,
        owner_id: i64,
    ) -> RepositoryResult<Item> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item::from_create(id, item_in, owner_id);
        self.items.write().insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: &Item, item_in: &ItemUpdate) -> RepositoryResult<Item> {
        let mut items = self.items.write();
        let stored = items.get_mut(&item.id).ok_or(RepositoryError::NotFound {
            entity: "Item",
            id: item.id,
        })?;
        item_in.apply_to(stored);
        Ok(stored.clone())
    }

    async fn remove(&self, id: i64) -> RepositoryResult<Item> {
        self.items
            .write()
            .remove(&id)
            .ok_or(RepositoryError::NotFound { entity: "Item", id })
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    by_token: RwLock<HashMap<String, i64>>,
    users: RwLock<HashMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed_users: &[SeedUser]) -> Self {
        let repo = Self::new();
        for seed in seed_users {
            repo.insert(User::from(seed), &seed.token);
        }
        repo
    }

    /// Register `user`, replacing any existing account with the same id
    pub fn insert(&self, user: User, token: &str) {
        let mut by_token = self.by_token.write();
        by_token.retain(|_, id| *id != user.id);
        by_token.insert(token.to_string(), user.id);
        self.users.write().insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>> {
        let id = match self.by_token.read().get(token) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.users.read().get(&id).cloned())
    }
}
