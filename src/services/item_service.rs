//! # Item Service
//!
//! The five item operations, independent of HTTP. Each one fetches through the
//! [`ItemRepository`], applies [`require_item_access`] where an existing item
//! is targeted, and delegates the write.
//!
//! Existence is checked before ownership, so a caller probing an id it does
//! not own learns whether that id exists (404 vs permission denied).

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::ownership::require_item_access;
use crate::models::{Item, ItemCreate, ItemUpdate, User};
use crate::repositories::user::is_superuser;
use crate::repositories::{ItemRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum ItemServiceError {
    #[error("Item not found")]
    NotFound,

    #[error("Not enough permissions")]
    PermissionDenied,

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ItemServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // Lost a race with a concurrent delete
            RepositoryError::NotFound { .. } => ItemServiceError::NotFound,
            other => ItemServiceError::Repository(other),
        }
    }
}

pub type ItemServiceResult<T> = Result<T, ItemServiceError>;

#[derive(Debug, Clone)]
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    /// Superusers page over every item; everyone else over their own.
    pub async fn list(&self, user: &User, skip: u32, limit: u32) -> ItemServiceResult<Vec<Item>> {
        let items = if is_superuser(user) {
            self.items.get_multi(skip, limit).await?
        } else {
            self.items.get_multi_by_owner(user.id, skip, limit).await?
        };

        debug!(
            user_id = user.id,
            skip,
            limit,
            count = items.len(),
            "Listed items"
        );
        Ok(items)
    }

    /// Create an item owned by `user`, whatever the payload says
    pub async fn create(&self, user: &User, item_in: ItemCreate) -> ItemServiceResult<Item> {
        let item = self.items.create_with_owner(item_in, user.id).await?;
        info!(item_id = item.id, owner_id = item.owner_id, "Item created");
        Ok(item)
    }

    pub async fn read(&self, user: &User, id: i64) -> ItemServiceResult<Item> {
        self.fetch_authorized(user, id).await
    }

    pub async fn update(
        &self,
        user: &User,
        id: i64,
        item_in: ItemUpdate,
    ) -> ItemServiceResult<Item> {
        let item = self.fetch_authorized(user, id).await?;
        let updated = self.items.update(&item, &item_in).await?;
        info!(item_id = updated.id, user_id = user.id, "Item updated");
        Ok(updated)
    }

    /// Remove the item and hand back its last stored state
    pub async fn delete(&self, user: &User, id: i64) -> ItemServiceResult<Item> {
        self.fetch_authorized(user, id).await?;
        let removed = self.items.remove(id).await?;
        info!(item_id = removed.id, user_id = user.id, "Item deleted");
        Ok(removed)
    }

    async fn fetch_authorized(&self, user: &User, id: i64) -> ItemServiceResult<Item> {
        let item = self
            .items
            .get(id)
            .await?
            .ok_or(ItemServiceError::NotFound)?;
        require_item_access(user, &item)?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryItemRepository;

    fn user(id: i64, is_superuser: bool) -> User {
        User {
            id,
            email: format!("user{id}@example.com"),
            full_name: None,
            is_active: true,
            is_superuser,
        }
    }

    fn create(title: &str) -> ItemCreate {
        ItemCreate {
            title: title.to_string(),
            description: Some(format!("{title} description")),
        }
    }

    /// Superuser 100, owner 1 with items 1 and 3, owner 2 with item 2
    async fn setup() -> (ItemService, Arc<InMemoryItemRepository>) {
        let repo = Arc::new(InMemoryItemRepository::new());
        let service = ItemService::new(repo.clone());
        service.create(&user(1, false), create("a1")).await.unwrap();
        service.create(&user(2, false), create("b1")).await.unwrap();
        service.create(&user(1, false), create("a2")).await.unwrap();
        (service, repo)
    }

    #[tokio::test]
    async fn test_list_scopes_by_role() {
        let (service, _) = setup().await;

        let all = service.list(&user(100, true), 0, 100).await.unwrap();
        assert_eq!(all.len(), 3);

        let own = service.list(&user(1, false), 0, 100).await.unwrap();
        assert_eq!(own.len(), 2);
        assert!(own.iter().all(|item| item.owner_id == 1));

        let none = service.list(&user(3, false), 0, 100).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_list_respects_skip_and_limit() {
        let (service, _) = setup().await;

        let page = service.list(&user(100, true), 1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, 2);

        let own_page = service.list(&user(1, false), 1, 10).await.unwrap();
        assert_eq!(own_page.len(), 1);
        assert_eq!(own_page[0].id, 3);
    }

    #[tokio::test]
    async fn test_create_forces_requester_as_owner() {
        let (service, _) = setup().await;
        let item = service.create(&user(2, false), create("mine")).await.unwrap();
        assert_eq!(item.owner_id, 2);
        assert_eq!(item.id, 4);

        let superuser_item = service.create(&user(100, true), create("admin")).await.unwrap();
        assert_eq!(superuser_item.owner_id, 100);
    }

    #[tokio::test]
    async fn test_read_checks_existence_before_ownership() {
        let (service, _) = setup().await;

        assert!(matches!(
            service.read(&user(2, false), 999).await,
            Err(ItemServiceError::NotFound)
        ));
        assert!(matches!(
            service.read(&user(2, false), 1).await,
            Err(ItemServiceError::PermissionDenied)
        ));
        assert_eq!(service.read(&user(1, false), 1).await.unwrap().id, 1);
        assert_eq!(service.read(&user(100, true), 1).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_denied_update_does_not_mutate() {
        let (service, repo) = setup().await;
        let before = repo.get(1).await.unwrap().unwrap();

        let result = service
            .update(
                &user(2, false),
                1,
                ItemUpdate {
                    title: Some("hijacked".to_string()),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ItemServiceError::PermissionDenied)));
        assert_eq!(repo.get(1).await.unwrap().unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_owner() {
        let (service, _) = setup().await;

        let updated = service
            .update(
                &user(100, true),
                1,
                ItemUpdate {
                    title: Some("renamed".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.description.as_deref(), Some("a1 description"));
        assert_eq!(updated.owner_id, 1);
    }

    #[tokio::test]
    async fn test_delete_is_terminal() {
        let (service, repo) = setup().await;

        let removed = service.delete(&user(1, false), 3).await.unwrap();
        assert_eq!(removed.title, "a2");
        assert!(repo.get(3).await.unwrap().is_none());

        assert!(matches!(
            service.delete(&user(1, false), 3).await,
            Err(ItemServiceError::NotFound)
        ));
        assert!(matches!(
            service.read(&user(100, true), 3).await,
            Err(ItemServiceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_denied_delete_keeps_item() {
        let (service, repo) = setup().await;

        assert!(matches!(
            service.delete(&user(1, false), 2).await,
            Err(ItemServiceError::PermissionDenied)
        ));
        assert!(repo.get(2).await.unwrap().is_some());
    }

    #[test]
    fn test_repository_not_found_maps_to_not_found() {
        let err: ItemServiceError = RepositoryError::NotFound {
            entity: "Item",
            id: 5,
        }
        .into();
        assert!(matches!(err, ItemServiceError::NotFound));

        let err: ItemServiceError = RepositoryError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, ItemServiceError::Repository(_)));
    }
}
