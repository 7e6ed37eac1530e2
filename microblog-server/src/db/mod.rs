//! Database layer - connection pool, request connections, and repositories
//!
//! # Design Principles
//!
//! - One pooled connection per request at most, acquired on first use
//! - Connections go back to the pool when the request ends, on every path
//! - Every write runs in its own transaction and is committed before returning

pub mod context;
pub mod pool;
pub mod repos;
pub mod schema;

pub use context::RequestDb;
pub use pool::{connect_options, create_pool};
pub use repos::EntryRepo;
pub use schema::{ensure_schema, init_schema};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
