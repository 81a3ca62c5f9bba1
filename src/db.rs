//! Database pool configuration and schema setup

use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::info;

/// Create the SQLite connection pool shared across requests
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    SqlitePoolOptions::new()
        // SQLite is single-writer, but can have multiple readers
        .max_connections(max_connections)
        // Don't wait too long for a connection
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))
}

/// Ensure the contacts table exists.
///
/// Idempotent; runs once at startup. A failure here is fatal to startup,
/// since serving requests against a missing table fails on every query.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow::anyhow!("Failed to initialize contacts schema: {}", e))?;

    info!("Contacts schema ready");
    Ok(())
}
