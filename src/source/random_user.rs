//! HTTP record source backed by the randomuser.me API

use super::{FetchOutcome, RecordSource, SourceError};
use crate::table::Record;
use serde::Deserialize;

/// Response envelope: `{ "results": [ ... ], "info": { ... } }`
#[derive(Debug, Deserialize)]
struct ApiResponse {
    results: Vec<ApiUser>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    name: ApiName,
    gender: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    first: String,
    last: String,
}

impl From<ApiUser> for Record {
    fn from(user: ApiUser) -> Self {
        Record {
            name: format!("{} {}", user.name.first, user.name.last),
            gender: user.gender,
            email: user.email,
        }
    }
}

/// Parse an API response body into at most `limit` records, in response order
pub fn parse_response(body: &str, limit: usize) -> Result<Vec<Record>, SourceError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .into_iter()
        .take(limit)
        .map(Record::from)
        .collect())
}

/// Fetches a fixed number of users with a single GET
#[derive(Debug, Clone)]
pub struct RandomUserSource {
    client: reqwest::Client,
    api_url: String,
    results: usize,
}

impl RandomUserSource {
    pub fn new(api_url: &str, results: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
            results,
        }
    }

    async fn try_fetch(&self) -> Result<Vec<Record>, SourceError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("results", self.results)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body, self.results)
    }
}

impl RecordSource for RandomUserSource {
    async fn fetch(&self) -> FetchOutcome {
        self.try_fetch().await.into()
    }

    fn describe(&self) -> String {
        format!("{} (results={})", self.api_url, self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> String {
        json!({
            "results": [
                {
                    "gender": "female",
                    "name": { "title": "Ms", "first": "Alice", "last": "Smith" },
                    "email": "alice.smith@example.com",
                    "nat": "GB"
                },
                {
                    "gender": "male",
                    "name": { "title": "Mr", "first": "Bob", "last": "Jones" },
                    "email": "bob.jones@example.com"
                }
            ],
            "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
        })
        .to_string()
    }

    #[test]
    fn parses_and_joins_names() {
        let records = parse_response(&body(), 10).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("Alice Smith", "female", "alice.smith@example.com"),
                Record::new("Bob Jones", "male", "bob.jones@example.com"),
            ]
        );
    }

    #[test]
    fn respects_limit() {
        let records = parse_response(&body(), 1).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice Smith");
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = parse_response("{\"error\":\"down\"}", 10).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_fails_without_panicking() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let source = RandomUserSource::new("http://127.0.0.1:9/api/", 10);
        match source.fetch().await {
            FetchOutcome::Failed(_) => {}
            FetchOutcome::Loaded(records) => panic!("unexpected records: {records:?}"),
        }
    }
}
