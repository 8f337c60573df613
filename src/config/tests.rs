//! Configuration tests
//!
//! Round-trips the written template through the file layer and checks the
//! env > file > default precedence.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Verify that the serialized default config parses back to the defaults
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

#[test]
fn test_config_roundtrip_custom_logging() {
    let mut config = Config::default();
    config.results = 25;
    config.export_path = PathBuf::from("/tmp/out.csv");
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let resolved = Config::resolve(parsed, no_env);
    assert_eq!(resolved, config);
}

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.results, 10);
    assert_eq!(config.export_path, PathBuf::from("selected_users.csv"));
    assert!(config.enable_tui);
    assert_eq!(config.demo_mode, None);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
api_url = "http://file.example/api"
results = 5
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("USERTABLE_API_URL", "http://env.example/api"),
            ("USERTABLE_NO_TUI", "1"),
            ("USERTABLE_DEMO", "fail"),
        ]),
    );

    assert_eq!(config.api_url, "http://env.example/api");
    assert_eq!(config.results, 5);
    assert!(!config.enable_tui);
    assert_eq!(config.demo_mode, Some(DemoMode::Failing));
}

#[test]
fn test_invalid_env_results_falls_back() {
    let file: FileConfig = toml::from_str("results = 3").unwrap();
    let config = Config::resolve(file, env_from(&[("USERTABLE_RESULTS", "lots")]));
    assert_eq!(config.results, 3);
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
