//! Command implementations for the microblog CLI

pub mod initdb;
pub mod serve;

pub use initdb::run_initdb;
pub use serve::run_serve;
