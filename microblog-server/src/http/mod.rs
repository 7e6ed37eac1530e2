//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing and per-request timeouts
//! - Redirect-after-write with signed flash cookies
//! - HTML error pages
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod flash;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
