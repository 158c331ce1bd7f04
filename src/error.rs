use thiserror::Error;

/// Crate-level errors raised while bootstrapping the service.
///
/// Request-path failures use [`crate::web::errors::ApiError`] instead; these
/// cover configuration, database connectivity and migrations.
#[derive(Debug, Error)]
pub enum YggdrasilError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for YggdrasilError {
    fn from(err: config::ConfigError) -> Self {
        YggdrasilError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, YggdrasilError>;
