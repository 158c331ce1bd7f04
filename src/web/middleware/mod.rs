//! # Web API Middleware
//!
//! Authentication and request/response processing applied around the item
//! routes.

pub mod auth;
pub mod request_id;

use axum::extract::Request;
use axum::middleware;
use axum::Router;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};

/// Apply the outer middleware stack, innermost first:
/// 1. Request ID generation
/// 2. Request timeout
/// 3. CORS handling
/// 4. Tracing and logging
///
/// The trace layer is outermost so the request ID lands on its span.
pub fn apply_middleware_stack<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(request_id::add_request_id))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
}

/// Per-request span; `request_id` is filled in by [`request_id::add_request_id`]
pub fn make_request_span(request: &Request) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
