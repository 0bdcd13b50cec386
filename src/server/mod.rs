//! HTTP API for the audit report.
//!
//! Provides four endpoints:
//! - `GET /` - API name and version
//! - `GET /health` - liveness
//! - `POST /analyze/upload` - audit uploaded CSV files
//! - `POST /analyze/default` - audit the files in the configured data directory
//!
//! Requests are independent; the server keeps no state besides its configuration.

mod error;
mod handlers;

use std::sync::Arc;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

pub use error::ApiError;
use handlers::{default_handler, health_handler, root_handler, upload_handler};

/// Upper bound on an upload request body; crawl exports run large.
const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// Builds the API router.
pub fn router(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/analyze/upload", post(upload_handler))
        .route("/analyze/default", post(default_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Serves the API on an already-bound listener until the server fails.
pub async fn serve_on(listener: TcpListener, config: ServerConfig) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    log::info!("Audit API listening on http://{addr}/");
    log::info!("  - Upload: http://{addr}/analyze/upload");
    log::info!("  - Default files: {}", config.data_dir.display());

    axum::serve(listener, router(config))
        .await
        .map_err(|e| anyhow::anyhow!("Audit API server error: {}", e))?;
    Ok(())
}

/// Binds `config.bind` and serves the API.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind audit API to {}: {}", config.bind, e))?;
    serve_on(listener, config).await
}
