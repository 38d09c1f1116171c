//! SQLite persistence for asset custody records.
//!
//! The store is a single local database file opened once at process
//! start and held for the process lifetime. Schema setup is idempotent;
//! a failure during setup must be treated as fatal by the embedding
//! process, while later per-operation failures leave the store at its
//! last committed state.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;

pub type DbPool = sqlx::SqlitePool;

/// Open (creating if absent) the database file and build a pool.
pub async fn create_pool(path: impl AsRef<Path>) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    tracing::info!(path = %path.as_ref().display(), "opened asset database");
    Ok(pool)
}

/// Create the `assets` table if it does not exist yet.
///
/// Safe to run on every startup: never drops or migrates existing rows.
/// `asset_tag` carries no UNIQUE constraint; duplicate tags are
/// accepted.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS assets (\
            id INTEGER PRIMARY KEY AUTOINCREMENT, \
            computer_name TEXT NOT NULL, \
            brand TEXT NOT NULL, \
            cpu TEXT NOT NULL, \
            ram TEXT NOT NULL, \
            storage TEXT NOT NULL, \
            consumables TEXT NOT NULL DEFAULT '', \
            serial_number TEXT NOT NULL DEFAULT '', \
            asset_tag TEXT NOT NULL, \
            custodian_name TEXT NOT NULL DEFAULT '', \
            custody_date TEXT NOT NULL, \
            created_at TEXT NOT NULL\
        )",
    )
    .execute(pool)
    .await?;
    tracing::debug!("asset schema ready");
    Ok(())
}

/// Verify the database answers queries.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
