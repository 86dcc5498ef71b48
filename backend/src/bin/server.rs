//! Gradebook HTTP Server Binary
//!
//! This is the main entry point for the gradebook REST API server.
//! It loads configuration, builds the result store, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gradebook-server
//!
//! # With an explicit config file
//! GRADEBOOK_CONFIG=backend/gradebook.toml cargo run --bin gradebook-server
//! ```
//!
//! # Environment Variables
//!
//! - `GRADEBOOK_CONFIG`: Path to the TOML config file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gradebook::config::AppConfig;
use gradebook::db::RepositoryFactory;
use gradebook::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting gradebook HTTP server");

    let config = AppConfig::load().context("Failed to load configuration")?;

    // The store lives exactly as long as this process.
    let repository = RepositoryFactory::from_settings(&config.store);
    info!(
        "Result store initialized (sample data: {})",
        config.store.seed_sample_data
    );

    let state = AppState::from_config(repository, &config);
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
