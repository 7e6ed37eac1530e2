//! Request-scoped database access
//!
//! A `RequestDb` is created for every request that needs the database.
//! It acquires a pooled connection the first time one is asked for and
//! hands it back when the request is done, including on error paths
//! (the connection is released on drop).

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

use super::DbError;

/// Lazily acquired connection bound to a single request
pub struct RequestDb {
    pool: SqlitePool,
    conn: Option<PoolConnection<Sqlite>>,
}

impl RequestDb {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool, conn: None }
    }

    /// Connection for this request, acquired on first call.
    ///
    /// Repeated calls return the same connection.
    pub async fn acquire(&mut self) -> Result<&mut SqliteConnection, DbError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                tracing::trace!("acquiring request connection");
                self.pool.acquire().await?
            }
        };

        Ok(&mut **self.conn.insert(conn))
    }

    /// Whether a connection is currently held.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Hand the connection back to the pool. No-op if none was acquired.
    pub fn release(&mut self) {
        if self.conn.take().is_some() {
            tracing::trace!("released request connection");
        }
    }
}

impl Drop for RequestDb {
    fn drop(&mut self) {
        self.release();
    }
}
