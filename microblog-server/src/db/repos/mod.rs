//! Repository implementations for database access
//!
//! Repositories borrow the request's connection rather than the pool,
//! so all statements of one request share a single connection.

pub mod entries;

pub use entries::EntryRepo;
