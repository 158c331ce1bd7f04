use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An item owned by exactly one user
/// Maps to `items` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
}

/// Payload for creating an item.
///
/// There is deliberately no `owner_id` field: unknown JSON fields are ignored,
/// so the owner always comes from the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update payload. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Build an item from a create payload with a forced owner
    pub fn from_create(id: i64, item_in: ItemCreate, owner_id: i64) -> Self {
        Self {
            id,
            title: item_in.title,
            description: item_in.description,
            owner_id,
        }
    }
}

impl ItemUpdate {
    /// Merge the present fields onto `item`. `id` and `owner_id` are never touched.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
