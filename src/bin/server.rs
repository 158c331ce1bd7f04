//! # Yggdrasil Server
//!
//! Runs the item API as a standalone HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! # Postgres backend; DATABASE_URL overrides database.url from config/yggdrasil.toml
//! cargo run --bin yggdrasil-server
//!
//! # In-memory backend with users from a config file
//! YGGDRASIL_CONFIG=config/local.toml YGGDRASIL__DATABASE__BACKEND=memory cargo run --bin yggdrasil-server
//! ```

use anyhow::Context;
use tokio::signal;
use tracing::info;

use yggdrasil::config::AppConfig;
use yggdrasil::logging;
use yggdrasil::web::{create_app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    logging::init_structured_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        bind_address = %config.web.bind_address,
        "Starting Yggdrasil server"
    );

    let bind_address = config.web.bind_address.clone();
    let state = AppState::from_config(config)
        .await
        .context("Failed to build application state")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!(address = %bind_address, "Web API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server terminated with an error")?;

    info!("Yggdrasil server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
