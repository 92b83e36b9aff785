use crate::{DbError, MIGRATOR, Result as DbErrorResult};

use fed_core::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

#[derive(Debug, Clone)]
pub struct IdentityPoolOptions {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

/// Opens (creating if needed) the identity database and brings its schema
/// up to date.
pub async fn open_pool(options: &IdentityPoolOptions) -> DbErrorResult<SqlitePool> {
    if let Some(parent) = options.path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    info!("Connecting to identity database: {}", options.path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&options.path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(options.busy_timeout),
        )
        .await?;

    info!("Running identity store migrations...");
    MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    Ok(pool)
}
