pub mod item_service;
pub mod ownership;

pub use item_service::{ItemService, ItemServiceError, ItemServiceResult};
pub use ownership::require_item_access;
