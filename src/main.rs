//! bookmarks-api server entry point.
//!
//! Starts the Axum HTTP server with the bookmark REST endpoints.

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use bookmarks_api::api;
use bookmarks_api::app_state::AppState;
use bookmarks_api::config::{AppConfig, LogFormat};
use bookmarks_api::persistence::{BookmarkStore, MemoryBookmarkStore, PostgresBookmarkStore};
use bookmarks_api::service::BookmarkService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting bookmarks-api");

    // Build persistence layer
    let store = build_store(&config).await?;
    tracing::info!(backend = store.backend(), "persistence ready");

    // Build service layer and application state
    let app_state = AppState {
        bookmark_service: Arc::new(BookmarkService::new(store)),
    };

    // Build router
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Connects to PostgreSQL, or falls back to the in-memory store when
/// persistence is disabled.
async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn BookmarkStore>> {
    if !config.persistence_enabled {
        tracing::warn!("persistence disabled; bookmarks are kept in memory only");
        return Ok(Arc::new(MemoryBookmarkStore::new()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(config.database_connect_timeout())
        .connect(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    Ok(Arc::new(PostgresBookmarkStore::new(pool)))
}
