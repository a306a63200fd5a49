//! Lifecycle of the shared store handle.
//!
//! The pool is opened once in `main`, cloned into every repository that needs
//! it and closed after the server has stopped accepting requests.

use crate::config::StorefrontConfig;
use crate::error::StoreError;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};

/// Opens the store, creating the database and its schema on first run.
pub async fn connect(config: &StorefrontConfig) -> Result<SqlitePool, StoreError> {
    // verify db exists
    if !Sqlite::database_exists(&config.database_url).await? {
        tracing::info!(url = %config.database_url, "database not found, creating");
        Sqlite::create_database(&config.database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    migrate(&pool).await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "connected to product store"
    );

    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| StoreError::QueryFailed(format!("failed to run migrations: {}", e)))
}

/// Waits for checked out connections to come back, then closes them all.
pub async fn close(pool: SqlitePool) {
    pool.close().await;
    tracing::info!("product store closed");
}
