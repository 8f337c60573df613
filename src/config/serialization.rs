//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    ///
    /// Runtime-only flags (demo mode, headless) are env-only and not written.
    pub fn to_toml(&self) -> String {
        let mut output = String::from("# usertable configuration\n");
        output.push_str("# Environment variables (USERTABLE_*) override these values.\n\n");

        output.push_str("# User API endpoint (GET {api_url}?results={results})\n");
        output.push_str(&format!("api_url = {:?}\n\n", self.api_url));

        output.push_str("# Number of users fetched\n");
        output.push_str(&format!("results = {}\n\n", self.results));

        output.push_str("# File written by the export key (x)\n");
        output.push_str(&format!(
            "export_path = {:?}\n\n",
            self.export_path.display().to_string()
        ));

        output.push_str(&self.logging_to_toml());
        output
    }

    fn logging_to_toml(&self) -> String {
        let logging = &self.logging;
        let mut output = String::from("[logging]\n");
        output.push_str("# trace, debug, info, warn, error (RUST_LOG overrides)\n");
        output.push_str(&format!("level = {:?}\n", logging.level));
        output.push_str("# Write JSON log lines to rotating files\n");
        output.push_str(&format!("file_enabled = {}\n", logging.file_enabled));
        output.push_str(&format!(
            "file_dir = {:?}\n",
            logging.file_dir.display().to_string()
        ));
        output.push_str("# hourly, daily, never\n");
        output.push_str(&format!(
            "file_rotation = {:?}\n",
            logging.file_rotation.as_str()
        ));
        output.push_str(&format!("file_prefix = {:?}\n", logging.file_prefix));
        output
    }
}
