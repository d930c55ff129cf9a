//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, holiday provider, cache setup, and Axum
//! server lifecycle.

use crate::config::Config;
use crate::domain::providers::HolidayProvider;
use crate::infrastructure::cache::{HolidayCache, MemoryCache};
use crate::infrastructure::provider::NagerClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Data directory and SQLite connection pool
/// - Apply migrations
/// - Holiday provider client and in-memory cache
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    // SQLite creates the database file on demand, but not its directory.
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("Failed to create data dir {}", config.data_dir.display()))?;

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate");

    let provider: Arc<dyn HolidayProvider> = Arc::new(
        NagerClient::new(&config.holiday_api_url, config.holiday_timeout())
            .context("Failed to build holiday API client")?,
    );

    let cache: Arc<dyn HolidayCache> = Arc::new(MemoryCache::new());
    tracing::info!("Holiday cache enabled (in-memory)");

    let state = AppState::new(Arc::new(pool), provider, cache, &config);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
