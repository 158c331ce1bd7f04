use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::config::SeedUser;

/// An authenticated account. Items reference users by `id`.
/// Maps to `users` table (the `api_token` column is never loaded into this struct)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl From<&SeedUser> for User {
    fn from(seed: &SeedUser) -> Self {
        Self {
            id: seed.id,
            email: seed.email.clone(),
            full_name: seed.full_name.clone(),
            is_active: seed.is_active,
            is_superuser: seed.is_superuser,
        }
    }
}
