pub mod item;
pub mod user;

// Re-export core models for easy access
pub use item::{Item, ItemCreate, ItemUpdate};
pub use user::User;
