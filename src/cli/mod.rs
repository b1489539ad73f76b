//! Command-line arguments for the `taskloom` binary.

use clap::Parser;
use std::path::PathBuf;

/// Interactive todo manager backed by a local SQLite file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the database file (falls back to storage.db_path / TASKLOOM_DB_PATH)
    #[arg(value_name = "DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
}
