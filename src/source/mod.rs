//! Record source: where the table's rows come from
//!
//! A source call never throws at the store. It returns a tagged
//! [`FetchOutcome`] and the store decides what a failure means (an empty
//! table).

mod random_user;

pub use random_user::RandomUserSource;

use crate::config::Config;
use crate::demo::DemoSource;
use crate::table::Record;
use std::future::Future;
use thiserror::Error;
use tokio::sync::mpsc;

/// Why a fetch produced no records
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Result of one source call
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded(Vec<Record>),
    Failed(SourceError),
}

impl From<Result<Vec<Record>, SourceError>> for FetchOutcome {
    fn from(result: Result<Vec<Record>, SourceError>) -> Self {
        match result {
            Ok(records) => FetchOutcome::Loaded(records),
            Err(err) => FetchOutcome::Failed(err),
        }
    }
}

/// Anything that can supply the table's records
pub trait RecordSource: Send + Sync {
    /// Fetch the full record set; takes no parameters
    fn fetch(&self) -> impl Future<Output = FetchOutcome> + Send;

    /// Short label for logs and the title bar
    fn describe(&self) -> String;
}

/// The concrete source selected by configuration
#[derive(Debug, Clone)]
pub enum Source {
    RandomUser(RandomUserSource),
    Demo(DemoSource),
}

impl Source {
    pub fn from_config(config: &Config) -> Self {
        match config.demo_mode {
            Some(mode) => Source::Demo(DemoSource::new(mode)),
            None => Source::RandomUser(RandomUserSource::new(&config.api_url, config.results)),
        }
    }
}

impl RecordSource for Source {
    async fn fetch(&self) -> FetchOutcome {
        match self {
            Source::RandomUser(source) => source.fetch().await,
            Source::Demo(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::RandomUser(source) => source.describe(),
            Source::Demo(source) => source.describe(),
        }
    }
}

/// Run one fetch in the background and deliver its outcome on `tx`
///
/// The table stays interactive (possibly empty) while this is in flight.
pub fn spawn_fetch<S>(source: S, tx: mpsc::Sender<FetchOutcome>) -> tokio::task::JoinHandle<()>
where
    S: RecordSource + 'static,
{
    tokio::spawn(async move {
        tracing::debug!("Fetching records from {}", source.describe());
        let outcome = source.fetch().await;
        // Receiver gone means the UI already quit
        let _ = tx.send(outcome).await;
    })
}
