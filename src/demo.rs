// Demo mode: serve a fixed set of users instead of calling the API
//
// Useful offline and for showcasing the TUI. The "fail" mode exercises the
// degraded path (source unavailable -> empty table).
//
// Run with: USERTABLE_DEMO=1 cargo run --release
//      or:  USERTABLE_DEMO=fail cargo run --release

use crate::source::{FetchOutcome, RecordSource, SourceError};
use crate::table::Record;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated network latency so the loading state is visible
const DEMO_LATENCY: Duration = Duration::from_millis(800);

/// Which demo behaviour to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    /// Serve the bundled users
    Offline,
    /// Always fail, as if the API were down
    Failing,
}

impl DemoMode {
    /// Parse the USERTABLE_DEMO value; unset/"0"/"false" means no demo
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "" | "0" | "false" => None,
            "fail" | "failing" => Some(DemoMode::Failing),
            _ => Some(DemoMode::Offline),
        }
    }
}

/// Demo record source
#[derive(Debug, Clone)]
pub struct DemoSource {
    mode: DemoMode,
    latency: Duration,
}

impl DemoSource {
    pub fn new(mode: DemoMode) -> Self {
        Self {
            mode,
            latency: DEMO_LATENCY,
        }
    }

    /// Demo source without simulated latency
    #[cfg(test)]
    pub fn instant(mode: DemoMode) -> Self {
        Self {
            mode,
            latency: Duration::ZERO,
        }
    }
}

impl RecordSource for DemoSource {
    async fn fetch(&self) -> FetchOutcome {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        match self.mode {
            DemoMode::Offline => FetchOutcome::Loaded(demo_users()),
            DemoMode::Failing => FetchOutcome::Failed(SourceError::Unavailable(
                "demo source configured to fail".to_string(),
            )),
        }
    }

    fn describe(&self) -> String {
        match self.mode {
            DemoMode::Offline => "demo".to_string(),
            DemoMode::Failing => "demo (failing)".to_string(),
        }
    }
}

/// Ten users shaped like randomuser.me output
pub fn demo_users() -> Vec<Record> {
    [
        ("Aino Lehtonen", "female", "aino.lehtonen@example.com"),
        ("Mathis Roux", "male", "mathis.roux@example.com"),
        ("Lucy Walker", "female", "lucy.walker@example.com"),
        ("Emre Akbulut", "male", "emre.akbulut@example.com"),
        ("Sofia Nunes", "female", "sofia.nunes@example.com"),
        ("Liam Clarke", "male", "liam.clarke@example.com"),
        ("Maja Jensen", "female", "maja.jensen@example.com"),
        ("Noah Schmitt", "male", "noah.schmitt@example.com"),
        ("Chloe Martin", "female", "chloe.martin@example.com"),
        ("Ravi Bhat", "male", "ravi.bhat@example.com"),
    ]
    .into_iter()
    .map(|(name, gender, email)| Record::new(name, gender, email))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_parsing() {
        assert_eq!(DemoMode::from_env_value("1"), Some(DemoMode::Offline));
        assert_eq!(DemoMode::from_env_value("true"), Some(DemoMode::Offline));
        assert_eq!(DemoMode::from_env_value("FAIL"), Some(DemoMode::Failing));
        assert_eq!(DemoMode::from_env_value("0"), None);
        assert_eq!(DemoMode::from_env_value("false"), None);
    }

    #[tokio::test]
    async fn offline_serves_ten_users() {
        match DemoSource::instant(DemoMode::Offline).fetch().await {
            FetchOutcome::Loaded(records) => assert_eq!(records.len(), 10),
            FetchOutcome::Failed(err) => panic!("unexpected failure: {err}"),
        }
    }

    #[tokio::test]
    async fn failing_mode_reports_unavailable() {
        let outcome = DemoSource::instant(DemoMode::Failing).fetch().await;
        assert!(matches!(
            outcome,
            FetchOutcome::Failed(SourceError::Unavailable(_))
        ));
    }
}
