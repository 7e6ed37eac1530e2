//! microblog CLI - serve the microblog and manage its database
//!
//! - `serve`: run the HTTP server
//! - `initdb`: drop and recreate the entries table

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use microblog_server::config::SETTINGS_ENV;
use microblog_server::Settings;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "microblog",
    author,
    version,
    about = "A tiny category-filtered microblog backed by SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// TOML settings file
    #[arg(long, global = true, env = SETTINGS_ENV)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create (or reset) the database tables
    Initdb(commands::initdb::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let loaded = match &cli.settings {
        Some(path) => Settings::load_optional(path).context("Failed to load settings")?,
        None => None,
    };
    let found = loaded.is_some();
    let mut settings = loaded.unwrap_or_default();
    settings.debug |= cli.debug;

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: settings.debug,
    })
    .ok();

    if let (Some(path), false) = (&cli.settings, found) {
        tracing::warn!(path = %path.display(), "settings file not found, using defaults");
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, settings).await?,
        Commands::Initdb(args) => commands::run_initdb(args, settings).await?,
    }
    Ok(())
}
