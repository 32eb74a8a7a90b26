//! # darkmoded — darkmode demo server
//!
//! Composition root that wires configuration, logging and the HTTP adapter.
//!
//! ## Responsibilities
//! - Load configuration (`darkmode.toml`, environment variables)
//! - Install the `tracing` subscriber
//! - Build the axum router serving the demo page and the wasm bundle
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;

use darkmode_adapter_http_axum::state::AppState;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    if !config.assets.dir.is_dir() {
        tracing::warn!(
            dir = %config.assets.dir.display(),
            "bundle directory missing, build it with wasm-pack or wasm-bindgen"
        );
    }

    let state = AppState::new(config.theme.clone(), config.assets.mount.as_str());
    let app = darkmode_adapter_http_axum::router::build(state, &config.assets.dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        storage_key = %config.theme.storage_key,
        marker_class = %config.theme.marker_class,
        "darkmoded listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("darkmoded stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
