//! # Authentication Middleware
//!
//! Resolves the `Authorization: Bearer <token>` header to a [`User`] through
//! the configured [`UserRepository`](crate::repositories::UserRepository) and
//! stores it in the request extensions for the
//! [`CurrentUser`](crate::web::extractors::CurrentUser) extractor.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use crate::models::User;
use crate::web::errors::ApiError;
use crate::web::state::AppState;

/// Authentication middleware for protected endpoints
pub async fn authenticate_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            warn!("Request missing authentication credentials");
            ApiError::auth_error("Not authenticated")
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        warn!("Authorization header contains non-UTF-8 bytes");
        ApiError::auth_error("Malformed Authorization header")
    })?;

    let token = extract_bearer_token(auth_str)?.to_string();

    let user: User = state.users.find_by_token(&token).await?.ok_or_else(|| {
        warn!("Bearer token did not match any user");
        ApiError::auth_error("Could not validate credentials")
    })?;

    debug!(
        user_id = user.id,
        is_superuser = user.is_superuser,
        "Request authenticated"
    );

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(auth_header: &str) -> Result<&str, ApiError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::auth_error("Authorization header must use Bearer scheme"))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::auth_error("Empty Bearer token"));
    }

    Ok(token)
}
