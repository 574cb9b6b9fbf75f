//! Listra CLI
//!
//! Command-line interface for the Listra to-do client.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use listra_cli::cli::Args;
use listra_cli::commands;

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    commands::run(args).await?;
    Ok(())
}
