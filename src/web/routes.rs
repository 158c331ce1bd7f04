//! # Web API Route Definitions

use axum::routing::get;
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Item routes, relative to the API prefix.
///
/// The collection is reachable with and without the trailing slash.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handlers::items::read_items).post(handlers::items::create_item),
        )
        .route(
            "/items/",
            get(handlers::items::read_items).post(handlers::items::create_item),
        )
        .route(
            "/items/:id",
            get(handlers::items::read_item)
                .put(handlers::items::update_item)
                .delete(handlers::items::delete_item),
        )
}

/// Health routes, never authenticated:
/// - `/health` - liveness
/// - `/health/ready` - readiness (pings storage)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::basic_health))
        .route("/health/ready", get(handlers::health::readiness_probe))
}
