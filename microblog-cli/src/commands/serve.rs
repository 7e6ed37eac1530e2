//! HTTP server command
//!
//! Runs the microblog server with the resolved settings.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use microblog_server::Settings;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides the settings file)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (overrides the settings file)
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs, mut settings: Settings) -> Result<()> {
    if let Some(bind) = args.bind {
        settings.bind_addr = bind;
    }
    if let Some(db_path) = args.db_path {
        settings.database = db_path;
    }

    tracing::info!("Starting microblog server on {}", settings.bind_addr);

    microblog_server::run_server(settings)
        .await
        .context("Server error")?;

    Ok(())
}
