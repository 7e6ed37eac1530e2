//! Schema bootstrap command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use microblog_server::db::init_schema;
use microblog_server::Settings;

/// Arguments for the initdb command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file (overrides the settings file)
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

/// Drop and recreate the entries table
pub async fn run_initdb(args: InitDbArgs, settings: Settings) -> Result<()> {
    let path = args.db_path.unwrap_or(settings.database);

    init_schema(&path)
        .await
        .with_context(|| format!("Failed to initialize database at {}", path.display()))?;

    println!("Initialized the database.");
    Ok(())
}
