//! Mock fetcher for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;
use crate::fetcher::DocumentFetcher;
use crate::source::Resource;

enum MockResponse {
    Document(Value),
    Failure(String),
}

/// A fetcher serving canned documents keyed by resource name.
///
/// Unknown resources fail with a network error.
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    delays: HashMap<String, Duration>,
    call_count: AtomicU32,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            delays: HashMap::new(),
            call_count: AtomicU32::new(0),
        }
    }

    /// Serve `document` for the resource displayed as `name`.
    pub fn with_document(mut self, name: &str, document: Value) -> Self {
        self.responses
            .insert(name.to_string(), MockResponse::Document(document));
        self
    }

    /// Fail the resource displayed as `name`.
    pub fn with_failure(mut self, name: &str, message: &str) -> Self {
        self.responses
            .insert(name.to_string(), MockResponse::Failure(message.to_string()));
        self
    }

    /// Delay the response for `name`.
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    /// Number of fetches performed.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentFetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, resource: &Resource) -> Result<Value, FetchError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        let name = resource.to_string();

        if let Some(delay) = self.delays.get(&name) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(&name) {
            Some(MockResponse::Document(value)) => Ok(value.clone()),
            Some(MockResponse::Failure(message)) => Err(FetchError::Network(message.clone())),
            None => Err(FetchError::Network(format!("no mock response for {name}"))),
        }
    }
}
