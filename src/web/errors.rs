//! # Web API Error Types
//!
//! HTTP-facing errors and their response conversions. Every error renders as
//! `{"error": {"code": ..., "message": ...}}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::repositories::RepositoryError;
use crate::services::ItemServiceError;

/// Web API specific errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Ownership check failed. Rendered as 400 rather than 403.
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    /// Well-formed JSON that does not match the expected payload
    #[error("Validation failed: {message}")]
    UnprocessableEntity { message: String },

    #[error("Unsupported media type: {message}")]
    UnsupportedMediaType { message: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationError { reason: String },

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,

    #[error("Database operation failed: {operation}")]
    DatabaseError { operation: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn auth_error(reason: impl Into<String>) -> Self {
        Self::AuthenticationError {
            reason: reason.into(),
        }
    }

    pub fn database_error(operation: impl Into<String>) -> Self {
        Self::DatabaseError {
            operation: operation.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PermissionDenied { .. } | ApiError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::AuthenticationError { .. } => StatusCode::UNAUTHORIZED,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::DatabaseError { .. } | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::PermissionDenied { .. } => "PERMISSION_DENIED",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::UnprocessableEntity { .. } => "VALIDATION_ERROR",
            ApiError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            ApiError::AuthenticationError { .. } => "AUTHENTICATION_FAILED",
            ApiError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ApiError::DatabaseError { .. } => "DATABASE_ERROR",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound { message }
            | ApiError::PermissionDenied { message }
            | ApiError::BadRequest { message }
            | ApiError::UnprocessableEntity { message }
            | ApiError::UnsupportedMediaType { message } => message,
            ApiError::AuthenticationError { reason } => reason,
            ApiError::ServiceUnavailable => "Service temporarily unavailable",
            ApiError::DatabaseError { operation } => operation,
            ApiError::Internal => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = json!({
            "error": {
                "code": self.code(),
                "message": self.message()
            }
        });

        (self.status_code(), Json(error_response)).into_response()
    }
}

impl From<ItemServiceError> for ApiError {
    fn from(err: ItemServiceError) -> Self {
        match err {
            ItemServiceError::NotFound => ApiError::not_found("Item not found"),
            ItemServiceError::PermissionDenied => {
                ApiError::permission_denied("Not enough permissions")
            }
            ItemServiceError::Repository(err) => err.into(),
        }
    }
}

/// Repository failures surface as opaque 500s; the detail only goes to the log
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, .. } => {
                ApiError::not_found(format!("{entity} not found"))
            }
            RepositoryError::Database(sqlx::Error::PoolTimedOut) => {
                error!("Database pool timed out");
                ApiError::ServiceUnavailable
            }
            RepositoryError::Database(db_err) => {
                error!(error = %db_err, "Repository operation failed");
                ApiError::database_error("Database operation failed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::UnprocessableEntity { message },
            StatusCode::UNSUPPORTED_MEDIA_TYPE => ApiError::UnsupportedMediaType { message },
            _ => ApiError::BadRequest { message },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Server-side path failures (route/extractor mismatch) stay opaque
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            error!(error = %rejection.body_text(), "Path extraction failed");
            return ApiError::Internal;
        }
        ApiError::bad_request(rejection.body_text())
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;
