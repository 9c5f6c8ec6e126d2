//! SQLite persistence.
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval
//! - [`connect`] - Pool creation and schema migration

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a SQLite pool for `database_url` and applies pending migrations.
///
/// The database file and its parent directory are created when missing.
///
/// # Errors
///
/// Returns an error if the URL is not a valid SQLite URL, the directory
/// cannot be created, or connecting/migrating fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid SQLite URL: {database_url}"))?
        .create_if_missing(true);

    if let Some(parent) = options.get_filename().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}
