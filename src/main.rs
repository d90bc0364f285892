//! Receipt Calculation Engine HTTP server.
//!
//! Loads the pinned rate table and serves the `/receipt` endpoint.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use receipt_engine::api::{AppState, create_router};
use receipt_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_dir =
        env::var("RECEIPT_CONFIG_DIR").unwrap_or_else(|_| "./config/iva_es".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        table = %config.metadata().name,
        version = %config.metadata().version,
        effective_date = %config.metadata().effective_date,
        "Loaded rate table"
    );

    let state = AppState::new(config);
    let router = create_router(state);

    let addr = env::var("RECEIPT_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Receipt engine listening");

    axum::serve(listener, router).await?;

    Ok(())
}
