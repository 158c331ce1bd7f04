//! # Database Operations
//!
//! Connection pooling and schema migrations for the Postgres backend.
//!
//! - [`connection`] - pool construction from [`DatabaseConfig`](crate::config::DatabaseConfig)
//! - [`migrations`] - embedded `migrations/` directory applied through sqlx

pub mod connection;
pub mod migrations;

pub use connection::DatabaseConnection;
pub use migrations::run_migrations;
