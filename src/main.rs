//! Server binary: wires config, logging, store, and router together.

use std::sync::Arc;
use todofile::{build_router, FileStore, ServerConfig, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(data = %config.data_path.display(), "configuration loaded");

    let store = Arc::new(FileStore::new(StoreConfig {
        path: config.data_path,
    }));
    let app = build_router(store);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(address = %config.addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
