//! Command-line interface for the server binary.

use clap::Parser;
use std::path::PathBuf;

/// Animedex - in-memory anime collection REST API
#[derive(Debug, Parser)]
#[command(name = "animedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on, overrides the config file
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Log filter used when `RUST_LOG` is unset (e.g. "debug")
    #[arg(long)]
    pub log_level: Option<String>,
}
