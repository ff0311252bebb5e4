//! Command-line interface.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod cards;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;
use crate::models::TravelKind;

#[derive(Parser)]
#[command(name = "travel-journal")]
#[command(about = "Travel journal for next travel ideas and past travels")]
#[command(version)]
pub struct Cli {
    /// Config file path (default: ./travel-journal.toml if present)
    #[arg(short, long, global = true, env = "TRAVEL_JOURNAL_CONFIG")]
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
    /// Start the web server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:4000)
        #[arg(env = "TRAVEL_JOURNAL_BIND")]
        bind: Option<String>,
        /// Directory served under /assets/
        #[arg(long, env = "TRAVEL_JOURNAL_ASSETS_DIR")]
        assets_dir: Option<PathBuf>,
        /// JSON file to persist travel entries to (default: memory only)
        #[arg(long, env = "TRAVEL_JOURNAL_DATA_FILE")]
        data_file: Option<PathBuf>,
    },

    /// Fetch a collection from a running server and print its card grid as HTML
    Cards {
        /// Collection to render: next or past
        kind: TravelKind,
        /// Server base URL (default: http://127.0.0.1:4000)
        #[arg(long, env = "TRAVEL_JOURNAL_URL")]
        url: Option<String>,
        /// Request timeout in seconds
        #[arg(
            long,
            env = "TRAVEL_JOURNAL_REQUEST_TIMEOUT",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout: Option<u64>,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            bind,
            assets_dir,
            data_file,
        } => {
            if let Some(bind) = bind {
                settings.bind = bind;
            }
            if let Some(dir) = assets_dir {
                settings.assets_dir = dir;
            }
            if data_file.is_some() {
                settings.data_file = data_file;
            }
            serve::cmd_serve(&settings).await
        }
        Commands::Cards { kind, url, timeout } => {
            if let Some(url) = url {
                settings.server_url = url;
            }
            if let Some(timeout) = timeout {
                settings.request_timeout = timeout;
            }
            cards::cmd_cards(&settings, kind).await
        }
    }
}
