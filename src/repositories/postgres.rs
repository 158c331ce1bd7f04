use async_trait::async_trait;
use sqlx::PgPool;

use super::{ItemRepository, RepositoryError, RepositoryResult, UserRepository};
use crate::models::{Item, ItemCreate, ItemUpdate, User};

/// Item repository over the `items` table
#[derive(Debug, Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn get(&self, id: i64) -> RepositoryResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, description, owner_id
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn get_multi(&self, skip: u32, limit: u32) -> RepositoryResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, description, owner_id
            FROM items
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(i64::from(skip))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn get_multi_by_owner(
        &self,
        owner_id: i64,
        skip: u32,
        limit: u32,
    ) -> RepositoryResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, description, owner_id
            FROM items
            WHERE owner_id = $1
            ORDER BY id
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(owner_id)
        .bind(i64::from(skip))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create_with_owner(
        &self,
        item_in: ItemCreate,
        owner_id: i64,
    ) -> RepositoryResult<Item> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (title, description, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, owner_id
            "#,
        )
        .bind(item_in.title)
        .bind(item_in.description)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update(&self, item: &Item, item_in: &ItemUpdate) -> RepositoryResult<Item> {
        // owner_id is intentionally absent from the SET list
        let updated = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, owner_id
            "#,
        )
        .bind(item.id)
        .bind(item_in.title.as_deref())
        .bind(item_in.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(RepositoryError::NotFound {
            entity: "Item",
            id: item.id,
        })
    }

    async fn remove(&self, id: i64) -> RepositoryResult<Item> {
        let removed = sqlx::query_as::<_, Item>(
            r#"
            DELETE FROM items
            WHERE id = $1
            RETURNING id, title, description, owner_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        removed.ok_or(RepositoryError::NotFound { entity: "Item", id })
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// User repository over the `users` table
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, is_active, is_superuser
            FROM users
            WHERE api_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
