//! Shared database plumbing for Chatrooms
//!
//! Opens the SQLite pool used by every domain repository and applies the
//! embedded migrations from the workspace `migrations/` directory.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::Result;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Pool size for file-backed databases
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to the database at `database_url` and run pending migrations.
///
/// In-memory databases live only as long as their connection, so they are
/// pinned to a single long-lived connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(DEFAULT_MAX_CONNECTIONS)
    };

    let pool = pool_options.connect_with(options).await?;
    MIGRATOR.run(&pool).await?;

    tracing::debug!(database_url = %database_url, "Database ready");
    Ok(pool)
}

/// Fresh, migrated in-memory database
pub async fn connect_in_memory() -> Result<SqlitePool> {
    connect("sqlite::memory:").await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
