// CLI module - command-line argument parsing and handlers
//
// Provides subcommands besides the default TUI:
// - export: fetch, filter, sort and select from the command line, write CSV
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::source::{FetchOutcome, RecordSource, Source};
use crate::table::{export, Field, ViewState};
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Browse, filter, sort and export user records
#[derive(Parser, Debug)]
#[command(name = "usertable")]
#[command(version = VERSION)]
#[command(about = "Interactive user table with CSV export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch users and write the selected rows as CSV without the TUI
    Export(ExportArgs),

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ExportArgs {
    /// Keep rows whose name contains this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Keep rows whose gender contains this text (case-insensitive)
    #[arg(long)]
    pub gender: Option<String>,

    /// Keep rows whose email contains this text (case-insensitive)
    #[arg(long)]
    pub email: Option<String>,

    /// Sort column: name, gender or email
    #[arg(long, value_parser = parse_field)]
    pub sort: Option<Field>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Rows to export, as 0-based positions in the filtered and sorted view
    /// (default: every visible row)
    #[arg(long, value_delimiter = ',')]
    pub rows: Vec<usize>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn parse_field(s: &str) -> Result<Field, String> {
    Field::parse(s).ok_or_else(|| format!("unknown column '{}' (expected name, gender or email)", s))
}

/// Handle synchronous CLI commands. Returns true if a command was handled.
///
/// `export` needs the runtime and is left to [`run_export`].
pub fn handle_config_command(command: &Commands) -> bool {
    match command {
        Commands::Config { show, reset, path } => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: usertable config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        Commands::Export(_) => false,
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# Runtime flags (env only)");
    println!("# tui = {}", config.enable_tui);
    println!("# demo = {:?}", config.demo_mode);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            println!("Aborted.");
            return;
        }

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

/// Build a view from fetched records and the command-line interaction
///
/// Filters and sort are applied first; `rows` then selects by position in the
/// resulting view. No rows means every visible row.
pub fn build_view(outcome: FetchOutcome, args: &ExportArgs) -> Result<ViewState> {
    let mut view = ViewState::new();
    view.apply_fetch(outcome);

    for (field, text) in [
        (Field::Name, &args.name),
        (Field::Gender, &args.gender),
        (Field::Email, &args.email),
    ] {
        if let Some(text) = text {
            view.set_filter(field, text.as_str());
        }
    }

    if let Some(key) = args.sort {
        view.set_sort(key);
        if args.desc {
            view.set_sort(key);
        }
    }

    let visible = view.rendered().len();
    if args.rows.is_empty() {
        for index in 0..visible {
            view.toggle_select(index);
        }
    } else {
        for &index in &args.rows {
            if index >= visible {
                bail!("row {} is out of range ({} rows visible)", index, visible);
            }
            if !view.is_selected(view.rendered()[index].id) {
                view.toggle_select(index);
            }
        }
    }

    Ok(view)
}

/// Fetch, build the view and write the selection as CSV
///
/// An unavailable source gives an empty table, so the output is just the
/// header row.
pub async fn run_export(args: ExportArgs, source: Source) -> Result<()> {
    tracing::info!("Fetching users from {}", source.describe());
    let outcome = source.fetch().await;

    let view = build_view(outcome, &args)?;
    let selected = view.export_selection();

    match &args.output {
        Some(path) => export::export_to_file(path, &selected)?,
        None => {
            let stdout = std::io::stdout();
            export::write_csv(&selected, stdout.lock())?;
        }
    }

    Ok(())
}
