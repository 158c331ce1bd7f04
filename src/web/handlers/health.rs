//! # Health Check Handlers
//!
//! Unauthenticated liveness and readiness endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Basic health check endpoint: GET /health
///
/// Returns OK whenever the process is serving requests.
pub async fn basic_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Readiness probe: GET /health/ready
///
/// Pings the item repository; 503 when storage is unreachable.
pub async fn readiness_probe(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    debug!("Performing readiness probe");

    match state.items.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ready".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            error!(error = %e, "Readiness probe failed");
            Err(ApiError::ServiceUnavailable)
        }
    }
}
