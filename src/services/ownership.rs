//! # Ownership Guard
//!
//! The single authorization rule shared by read, update and delete: a
//! superuser may touch any item, everyone else only the items they own.

use tracing::warn;

use crate::models::{Item, User};
use crate::repositories::user::is_superuser;

use super::item_service::ItemServiceError;

/// Check that `user` may access `item`.
///
/// Returns `Err(ItemServiceError::PermissionDenied)` when the user is neither
/// a superuser nor the item's owner.
pub fn require_item_access(user: &User, item: &Item) -> Result<(), ItemServiceError> {
    if is_superuser(user) || item.owner_id == user.id {
        return Ok(());
    }

    warn!(
        user_id = user.id,
        item_id = item.id,
        owner_id = item.owner_id,
        "Item access denied"
    );
    Err(ItemServiceError::PermissionDenied)
}
