mod config;
mod errors;
mod files;
mod models;
mod routes;
mod schema;
mod state;
mod storage;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::files::DiskFileStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::MemStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                // Events carry the bin target's module path, `api`.
                .unwrap_or_else(|_| EnvFilter::new(format!("api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // In-memory repository: records live for the process lifetime only.
    // Uploaded files under the upload dir are the only state that survives.
    let storage = Arc::new(MemStorage::new());
    let files = Arc::new(DiskFileStore::new(config.upload_dir.clone()));
    info!("Upload directory: {}", config.upload_dir.display());

    let state = AppState {
        storage,
        files,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
