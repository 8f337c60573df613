//! Configuration for the user table
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/usertable/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::demo::DemoMode;
use crate::table::export::DEFAULT_EXPORT_FILE;
use serde::Deserialize;
use std::path::PathBuf;

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default user API endpoint
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Number of users requested per fetch
pub const DEFAULT_RESULTS: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// User API endpoint
    pub api_url: String,

    /// How many users to request
    pub results: usize,

    /// Where `x` in the TUI writes the selected rows
    pub export_path: PathBuf,

    /// Whether to enable the TUI (headless runs print the table instead)
    pub enable_tui: bool,

    /// Demo mode: serve bundled users instead of calling the API
    pub demo_mode: Option<DemoMode>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            results: DEFAULT_RESULTS,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            enable_tui: true,
            demo_mode: None,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub results: Option<usize>,
    pub export_path: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/usertable/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("usertable").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be read or parsed:
    /// a broken config should fail loudly, not fall back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `usertable config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // API URL: env > file > default
        let api_url = env("USERTABLE_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // Result count: env > file > default (unparsable env values are ignored)
        let results = env("USERTABLE_RESULTS")
            .and_then(|v| v.parse().ok())
            .or(file.results)
            .unwrap_or(DEFAULT_RESULTS);

        // Export path: env > file > default
        let export_path = env("USERTABLE_EXPORT_PATH")
            .or(file.export_path)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("USERTABLE_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("USERTABLE_DEMO").and_then(|v| DemoMode::from_env_value(&v));

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            api_url,
            results,
            export_path,
            enable_tui,
            demo_mode,
            logging,
        }
    }
}
