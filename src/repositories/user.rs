use crate::models::User;

/// Superusers bypass item ownership checks
pub fn is_superuser(user: &User) -> bool {
    user.is_superuser
}

pub fn is_active(user: &User) -> bool {
    user.is_active
}
