use clap::Parser;
use std::path::PathBuf;

/// Report header-level statistics of a SQLite database file.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the database file.
    pub db_path: PathBuf,
    /// Dot command to run. Only `.dbinfo` is supported.
    pub command: String,
}
