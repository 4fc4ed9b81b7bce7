//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Account dashboard lists in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "paydash",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Account dashboard lists with resilient loading"
)]
pub struct Cli {
    /// Dashboard API base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Treat the account as premium (enables the friends cache fallback)
    #[arg(long)]
    pub premium: bool,

    /// Remote attempts beyond the first (overrides config)
    #[arg(long)]
    pub retries: Option<u32>,

    /// Directory for the friends cache file
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Config file path (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List friends
    Friends,
    /// List cards
    Cards,
    /// List sent transfers
    Sent,
    /// List received transfers
    Received,
}
