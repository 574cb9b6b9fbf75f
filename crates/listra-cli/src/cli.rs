//! Command-line argument definitions.

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Listra CLI - to-do list client
#[derive(Parser, Debug)]
#[command(name = "listra")]
#[command(about = "To-do list client synchronized against a REST collection", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Base URL of the collection resource (overrides config)
    #[arg(long, global = true, env = "LISTRA_BASE_URL")]
    pub base_url: Option<String>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List items
    List(ListArgs),
    /// Add a new item
    Add {
        /// Item text (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Flip the checked flag of an item
    Toggle {
        /// Id of the item to toggle
        id: u64,
    },
    /// Delete an item
    Rm {
        /// Id of the item to delete
        id: u64,
    },
    /// Print the total item count
    Count,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the `list` subcommand.
#[derive(ClapArgs, Debug, Default)]
pub struct ListArgs {
    /// Only show items whose text contains this string (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show checked items
    #[arg(long, conflicts_with = "unchecked")]
    pub checked: bool,

    /// Only show unchecked items
    #[arg(long)]
    pub unchecked: bool,

    /// Emit the item list as JSON
    #[arg(long)]
    pub json: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Create a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Get a configuration value by key
    Get {
        /// Configuration key (e.g. `base_url`)
        key: String,
    },
}
