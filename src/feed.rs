// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model feed refresh
//!
//! Fetches the published model feed over HTTP and writes it to the local
//! models file. One attempt, no retry: the shell glue schedules updates, so
//! transient failures just wait for the next run.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Result, ShelpError};
use crate::registry::ModelDescriptor;

/// Feed URL used when neither --url nor the models_url key is set.
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/shelp-sh/model-feed/main/models.json";

/// Current version of shelp
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// What an update run found and wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    /// Descriptors in the fetched feed.
    pub total: usize,
    /// Descriptors that validate into records.
    pub valid: usize,
}

/// Fetch and parse the feed, returning the raw body alongside the
/// descriptors so callers can persist the feed byte-for-byte.
pub async fn fetch_feed(url: &str) -> Result<(String, Vec<ModelDescriptor>)> {
    let client = reqwest::Client::builder()
        .user_agent(format!("shelp/{}", VERSION))
        .timeout(FETCH_TIMEOUT)
        .build()?;

    debug!("fetching model feed from {url}");
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ShelpError::Feed(format!(
            "feed request to {url} returned {}",
            response.status()
        )));
    }

    let body = response.text().await?;
    let descriptors: Vec<ModelDescriptor> = serde_json::from_str(&body)
        .map_err(|err| ShelpError::Feed(format!("feed from {url} is not a model array: {err}")))?;

    Ok((body, descriptors))
}

/// Fetch the feed and replace the models file with it.
///
/// A feed with no valid descriptor at all is refused before anything is
/// written; the previous models file stays in place.
pub async fn update_models_file(url: &str, path: &Path) -> Result<FeedSummary> {
    let (body, descriptors) = fetch_feed(url).await?;

    let total = descriptors.len();
    let valid = descriptors
        .iter()
        .filter(|d| (*d).clone().into_record().is_some())
        .count();

    if valid == 0 {
        return Err(ShelpError::Feed(format!(
            "feed from {url} has no usable models ({total} entries), keeping the current file"
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &body)?;
    info!("wrote {valid} of {total} feed entries to {}", path.display());

    Ok(FeedSummary { total, valid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED_BODY: &str = r#"[
        {
            "provider": "anthropic",
            "model": "claude-3-5-haiku-20241022",
            "endpoint": "https://api.anthropic.com/v1/messages",
            "prompt_cost": 0.00000025,
            "completion_cost": 0.00000125
        },
        {
            "provider": "openai",
            "model": "gpt-4o-mini"
        }
    ]"#;

    #[tokio::test]
    async fn test_fetch_feed_parses_descriptors() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
            .mount(&mock_server)
            .await;

        let url = format!("{}/models.json", mock_server.uri());
        let (body, descriptors) = fetch_feed(&url).await.unwrap();

        assert_eq!(body, FEED_BODY);
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].provider.as_deref(), Some("anthropic"));
    }

    #[tokio::test]
    async fn test_fetch_feed_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/models.json", mock_server.uri());
        let err = fetch_feed(&url).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_feed_rejects_non_array_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"oops": true}"#))
            .mount(&mock_server)
            .await;

        let url = format!("{}/models.json", mock_server.uri());
        let err = fetch_feed(&url).await.unwrap_err();
        assert!(err.to_string().contains("not a model array"));
    }

    #[tokio::test]
    async fn test_update_writes_feed_verbatim() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
            .mount(&mock_server)
            .await;

        let dir = TempDir::new().unwrap();
        let models_path = dir.path().join("models.json");
        let url = format!("{}/models.json", mock_server.uri());

        let summary = update_models_file(&url, &models_path).await.unwrap();
        assert_eq!(summary, FeedSummary { total: 2, valid: 1 });
        assert_eq!(std::fs::read_to_string(&models_path).unwrap(), FEED_BODY);
    }

    #[tokio::test]
    async fn test_update_refuses_feed_with_no_usable_models() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"[{"provider": "openai"}]"#),
            )
            .mount(&mock_server)
            .await;

        let dir = TempDir::new().unwrap();
        let models_path = dir.path().join("models.json");
        std::fs::write(&models_path, "previous feed").unwrap();
        let url = format!("{}/models.json", mock_server.uri());

        let err = update_models_file(&url, &models_path).await.unwrap_err();
        assert!(err.to_string().contains("no usable models"));
        // the previous file is untouched
        assert_eq!(
            std::fs::read_to_string(&models_path).unwrap(),
            "previous feed"
        );
    }

    #[tokio::test]
    async fn test_update_creates_parent_directories() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
            .mount(&mock_server)
            .await;

        let dir = TempDir::new().unwrap();
        let models_path = dir.path().join("deep").join("models.json");
        let url = format!("{}/models.json", mock_server.uri());

        update_models_file(&url, &models_path).await.unwrap();
        assert!(models_path.exists());
    }
}
