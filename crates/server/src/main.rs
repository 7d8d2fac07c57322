//! RateFind HTTP server.
//!
//! Serves the rating and suggestion actions as JSON over HTTP, backed by
//! the lookup backend chosen in the environment (see `ServerConfig`).

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().context("Reading server configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,lookups=debug")),
        )
        .init();

    info!("Starting RateFind server");

    let lookups = config.lookups.build().await?;
    let app = build_router(AppState::new(&lookups));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Binding {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
