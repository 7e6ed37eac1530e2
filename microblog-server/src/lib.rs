//! microblog-server: a small category-filtered microblog over SQLite
//!
//! Serves server-rendered HTML for listing, adding, updating and
//! deleting entries. Each request borrows at most one pooled
//! connection for its lifetime.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use config::{ConfigError, Settings};
pub use http::{build_router, run_server, AppState, ServerError};
