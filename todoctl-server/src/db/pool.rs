//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. Each request checks
//! out at most one connection through a [`ConnectionScope`](super::ConnectionScope).

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use super::DbError;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool for the database file at `path`.
///
/// The file (and its parent directory) is created if missing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the first
/// connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("todo.db")).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool, DbError> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `path` - SQLite database file
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, DbError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| DbError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(path = %path.display(), max_connections, "sqlite pool ready");
    Ok(pool)
}
