//! Per-request connection scope
//!
//! A [`ConnectionScope`] is created for every inbound request. It checks out
//! a pool connection the first time a handler asks for one and hands back
//! the same connection on later calls. The connection is closed when the
//! scope is released or dropped, whichever happens first, so a request that
//! errors or panics still gives up its handle. The pool only bounds how many
//! handles are open at once; no SQLite handle (or its TEMP tables and
//! PRAGMAs) outlives the request that opened it.
//!
//! Scopes are never shared between requests.

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

use super::DbError;

/// Lazily acquired database connection owned by one request.
pub struct ConnectionScope {
    pool: SqlitePool,
    conn: Option<PoolConnection<Sqlite>>,
}

impl ConnectionScope {
    /// Create an empty scope. Nothing is checked out until [`acquire`](Self::acquire).
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool, conn: None }
    }

    /// Get this scope's connection, checking one out on first use.
    ///
    /// # Errors
    ///
    /// Returns the pool error if no connection can be opened; the scope stays
    /// empty and a later call may retry.
    pub async fn acquire(&mut self) -> Result<&mut SqliteConnection, DbError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                let conn = self.pool.acquire().await?;
                tracing::debug!("request connection acquired");
                conn
            }
        };

        Ok(&mut **self.conn.insert(conn))
    }

    /// Whether a connection is currently checked out.
    pub fn is_acquired(&self) -> bool {
        self.conn.is_some()
    }

    /// End the scope, closing its connection if one was taken.
    pub fn release(mut self) {
        self.release_connection();
    }

    fn release_connection(&mut self) {
        if let Some(mut conn) = self.conn.take() {
            // Closed in the background; the pool slot frees once it is gone
            conn.close_on_drop();
            drop(conn);
            tracing::debug!("request connection closed");
        }
    }
}

impl Drop for ConnectionScope {
    fn drop(&mut self) {
        self.release_connection();
    }
}
