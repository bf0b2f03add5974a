//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod extract;
mod fetch;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use foodsafety::config::{load_settings_with_options, LoadOptions};

use super::helpers::SearchArgs;

#[derive(Parser)]
#[command(name = "foodsafety")]
#[command(about = "King County food safety inspection scraper")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search and save the raw results page
    Fetch {
        #[command(flatten)]
        search: SearchArgs,
        /// Where to save the page (defaults to the configured page file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract inspection records from a saved results page
    Extract {
        /// Saved results page (defaults to the configured page file)
        file: Option<PathBuf>,
        /// Fetch a fresh page into the file first
        #[arg(long)]
        fetch: bool,
        #[command(flatten)]
        search: SearchArgs,
        /// Skip listings that fail to extract instead of stopping
        #[arg(long)]
        skip_errors: bool,
        /// Stop after this many records (0 = unlimited)
        #[arg(short, long, default_value = "0")]
        limit: usize,
        /// Pretty-print each record
        #[arg(long)]
        pretty: bool,
        /// Only treat elements with this tag as listings (e.g. div)
        #[arg(long)]
        listing_tag: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the loaded config file and resolved settings
    Show,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (mut settings, config) = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Fetch { search, output } => {
            fetch::cmd_fetch(&settings, &search, output.as_deref()).await
        }
        Commands::Extract {
            file,
            fetch,
            search,
            skip_errors,
            limit,
            pretty,
            listing_tag,
        } => {
            if listing_tag.is_some() {
                settings.listing.tag = listing_tag;
            }
            let options = extract::ExtractOptions {
                file,
                fetch,
                search,
                skip_errors,
                limit,
                pretty,
            };
            extract::cmd_extract(&settings, options).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_cmd::cmd_config_show(&settings, &config),
        },
    }
}
