//! Document fetching over HTTP and from local files.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use crate::error::FetchError;
use crate::source::Resource;

/// Fetches one raw JSON document.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Human-readable fetcher name (e.g. "default").
    fn name(&self) -> &str;

    /// Fetch and parse a single resource.
    async fn fetch(&self, resource: &Resource) -> Result<Value, FetchError>;
}

/// Fetcher backed by `reqwest` for URLs and `tokio::fs` for files.
pub struct DefaultFetcher {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl DefaultFetcher {
    /// Create a fetcher. Requests never time out unless `timeout` is set.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    async fn fetch_url(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout.unwrap_or_default(),
                }
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_json(&body, url)
    }

    async fn fetch_file(&self, path: &std::path::Path) -> Result<Value, FetchError> {
        let body = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FetchError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        parse_json(&body, &path.display().to_string())
    }
}

fn parse_json(body: &str, location: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::InvalidJson {
        location: location.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl DocumentFetcher for DefaultFetcher {
    fn name(&self) -> &str {
        "default"
    }

    #[instrument(skip(self), fields(resource = %resource))]
    async fn fetch(&self, resource: &Resource) -> Result<Value, FetchError> {
        match resource {
            Resource::Url(url) => self.fetch_url(url).await,
            Resource::File(path) => self.fetch_file(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_json_over_http() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "lessons": [{ "number": 1, "pages": [] }]
        });

        Mock::given(method("GET"))
            .and(path("/db-1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let fetcher = DefaultFetcher::new(None).unwrap();
        let value = fetcher
            .fetch(&Resource::Url(format!("{}/db-1.json", server.uri())))
            .await
            .unwrap();
        assert_eq!(value, body);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = DefaultFetcher::new(None).unwrap();
        let err = fetcher
            .fetch(&Resource::Url(format!("{}/missing.json", server.uri())))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn invalid_json_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/broken.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let fetcher = DefaultFetcher::new(None).unwrap();
        let err = fetcher
            .fetch(&Resource::Url(format!("{}/broken.json", server.uri())))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/slow.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let fetcher = DefaultFetcher::new(Some(Duration::from_millis(100))).unwrap();
        let err = fetcher
            .fetch(&Resource::Url(format!("{}/slow.json", server.uri())))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }));
        assert!(err.to_string().ends_with("timed out after 100ms"));
    }

    #[tokio::test]
    async fn reads_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("database 1-4.json");
        std::fs::write(&file, r#"{"lessons": []}"#).unwrap();

        let fetcher = DefaultFetcher::new(None).unwrap();
        let value = fetcher.fetch(&Resource::File(file)).await.unwrap();
        assert!(value["lessons"].is_array());

        let err = fetcher
            .fetch(&Resource::File(dir.path().join("nope.json")))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
