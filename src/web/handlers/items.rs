//! # Item Handlers
//!
//! CRUD endpoints for items. Superusers see and modify every item; other
//! users only their own. Ownership failures answer 400 "Not enough
//! permissions", missing ids 404 "Item not found".

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::models::{Item, ItemCreate, ItemUpdate};
use crate::web::errors::ApiResult;
use crate::web::extractors::{ApiJson, ApiPath, ApiQuery, CurrentUser};
use crate::web::state::AppState;

/// Query parameters for item listing
#[derive(Debug, Default, Deserialize)]
pub struct ItemListQuery {
    #[serde(default)]
    pub skip: u32,
    /// Falls back to `pagination.default_limit` (100 unless configured)
    pub limit: Option<u32>,
}

/// List items: GET /items/
pub async fn read_items(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiQuery(query): ApiQuery<ItemListQuery>,
) -> ApiResult<Json<Vec<Item>>> {
    let limit = query.limit.unwrap_or_else(|| state.default_limit());
    debug!(user_id = user.id, skip = query.skip, limit, "Listing items");

    let items = state.item_service.list(&user, query.skip, limit).await?;
    Ok(Json(items))
}

/// Create an item owned by the caller: POST /items/
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(item_in): ApiJson<ItemCreate>,
) -> ApiResult<Json<Item>> {
    let item = state.item_service.create(&user, item_in).await?;
    Ok(Json(item))
}

/// Get one item: GET /items/{id}
pub async fn read_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Item>> {
    debug!(user_id = user.id, item_id = id, "Retrieving item");
    let item = state.item_service.read(&user, id).await?;
    Ok(Json(item))
}

/// Merge fields onto an item: PUT /items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(item_in): ApiJson<ItemUpdate>,
) -> ApiResult<Json<Item>> {
    let item = state.item_service.update(&user, id, item_in).await?;
    Ok(Json(item))
}

/// Delete an item, returning its last state: DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Item>> {
    let item = state.item_service.delete(&user, id).await?;
    Ok(Json(item))
}
