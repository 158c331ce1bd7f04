//! # Web API Module
//!
//! Axum-based REST API exposing the item endpoints.
//!
//! - [`routes`] - HTTP route definitions
//! - [`handlers`] - request handlers for items and health
//! - [`middleware`] - authentication, request ids, tracing, timeouts
//! - [`extractors`] - the `CurrentUser` extractor
//! - [`state`] - shared application state and repositories
//! - [`errors`] - `ApiError` and its HTTP rendering

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use std::time::Duration;

use state::AppState;

/// Create the main Axum application with all routes and middleware
pub fn create_app(app_state: AppState) -> Router {
    let request_timeout = Duration::from_millis(app_state.config.web.request_timeout_ms);

    // Protected routes - auth middleware applied to matched routes only
    let protected_routes = routes::item_routes().route_layer(
        axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::authenticate_request,
        ),
    );

    let api_prefix = app_state.config.web.api_prefix.trim_end_matches('/');
    let api_routes = if api_prefix.is_empty() {
        protected_routes
    } else {
        Router::new().nest(api_prefix, protected_routes)
    };

    let router = Router::new()
        .merge(routes::health_routes())
        .merge(api_routes);

    middleware::apply_middleware_stack(router, request_timeout).with_state(app_state)
}
