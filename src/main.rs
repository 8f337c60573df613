// usertable - interactive user table with CSV export
//
// Fetches a batch of user records and lets you filter, sort, reorder and
// select them in a terminal UI, then export the selection as CSV.
//
// Architecture:
// - Source (reqwest): fetches records in the background; failures become an
//   empty table
// - Table: the view-state store (filter, sort, manual order, selection)
// - TUI (ratatui): renders the view and turns keys into store mutations
// - CLI (clap): headless export and config management
// - Event system: an mpsc channel delivers fetch results to the TUI

mod cli;
mod config;
mod demo;
mod logging;
mod source;
mod table;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ExportArgs};
use config::Config;
use logging::LogBuffer;
use source::{RecordSource, Source};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config subcommands run before anything else is set up
    if let Some(command) = &cli.command {
        if cli::handle_config_command(command) {
            return Ok(());
        }
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // The TUI only runs without a subcommand and when not disabled
    let export_args = match cli.command {
        Some(Commands::Export(args)) => Some(args),
        _ if !config.enable_tui => Some(ExportArgs::default()),
        _ => None,
    };

    let source = Source::from_config(&config);

    // In TUI mode logs go to the in-app panel, otherwise to stderr.
    // The guard must be kept alive for the file writer to flush.
    match export_args {
        Some(args) => {
            let _file_guard = logging::init(&config.logging, None);
            log_demo_mode(&config, &source);
            cli::run_export(args, source).await
        }
        None => {
            let log_buffer = LogBuffer::new();
            let _file_guard = logging::init(&config.logging, Some(log_buffer.clone()));
            log_demo_mode(&config, &source);
            tui::run_tui(config, log_buffer, source).await
        }
    }
}

fn log_demo_mode(config: &Config, source: &Source) {
    if config.demo_mode.is_some() {
        tracing::info!("Running in DEMO MODE - {}", source.describe());
    }
}
