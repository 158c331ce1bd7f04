#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Yggdrasil
//!
//! HTTP service for user-owned items.
//!
//! ## Overview
//!
//! Every item has exactly one owner, fixed when it is created. Regular users
//! list, read, update and delete only their own items; superusers act on all
//! of them. Each endpoint is a short fetch / ownership-check / delegate
//! sequence over a pluggable storage layer.
//!
//! ## Module Organization
//!
//! - [`models`] - `Item`, `User` and the create/update payloads
//! - [`repositories`] - storage traits with Postgres and in-memory backends
//! - [`services`] - item operations and the ownership guard
//! - [`web`] - axum routes, handlers, auth middleware and error rendering
//! - [`database`] - connection pooling and migrations
//! - [`config`] - layered configuration
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - crate-level error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yggdrasil::config::AppConfig;
//! use yggdrasil::web::{create_app, state::AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let state = AppState::from_config(config).await?;
//! let app = create_app(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test                            # Unit and in-memory integration tests
//! cargo test --features postgres-tests  # Repository tests against DATABASE_URL
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{Result, YggdrasilError};
pub use models::{Item, ItemCreate, ItemUpdate, User};
pub use repositories::{ItemRepository, RepositoryError, UserRepository};
pub use services::{ItemService, ItemServiceError};
