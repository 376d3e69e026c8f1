//! The database loader.
//!
//! Fans out one fetch per resource, waits for all of them to settle, then
//! merges the valid documents in input order.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;

use wortschatz_core::document::Document;
use wortschatz_core::{LessonDatabase, LoadError};

use crate::error::FetchError;
use crate::fetcher::{DefaultFetcher, DocumentFetcher};
use crate::source::{Resource, Sources};

/// Loads and merges database documents.
pub struct DatabaseLoader {
    fetcher: Arc<dyn DocumentFetcher>,
}

impl DatabaseLoader {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>) -> Self {
        Self { fetcher }
    }

    /// Loader using the HTTP/file fetcher.
    pub fn with_default_fetcher(timeout: Option<Duration>) -> Result<Self, FetchError> {
        Ok(Self::new(Arc::new(DefaultFetcher::new(timeout)?)))
    }

    /// Load `sources` into a single database.
    ///
    /// Failing resources are logged and skipped; only a missing source
    /// configuration or an unparseable embedded document is an error.
    pub async fn load(&self, sources: &Sources) -> Result<LessonDatabase, LoadError> {
        let db = match sources {
            Sources::Embedded(content) => {
                let value: Value = serde_json::from_str(content)?;
                let document = Document::from_value(value);
                if document.is_none() {
                    tracing::warn!("embedded database has no lessons array");
                }
                LessonDatabase::merge([document])
            }
            Sources::Resources(resources) if resources.is_empty() => {
                return Err(LoadError::NoSources);
            }
            Sources::Resources(resources) => {
                tracing::debug!(
                    fetcher = self.fetcher.name(),
                    count = resources.len(),
                    "fetching databases"
                );
                let documents = join_all(resources.iter().map(|r| self.fetch_document(r))).await;
                let loaded = documents.iter().filter(|d| d.is_some()).count();
                tracing::info!(
                    "loaded {loaded}/{} database documents",
                    resources.len()
                );
                LessonDatabase::merge(documents)
            }
        };

        tracing::info!(
            lessons = db.lessons().len(),
            pages = db.page_count(),
            words = db.word_count(),
            "database ready"
        );
        Ok(db)
    }

    async fn fetch_document(&self, resource: &Resource) -> Option<Document> {
        match self.fetcher.fetch(resource).await {
            Ok(value) => {
                let document = Document::from_value(value);
                if document.is_none() {
                    tracing::warn!("ignoring {resource}: no lessons array");
                }
                document
            }
            Err(e) => {
                tracing::warn!("failed to load {resource}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockFetcher;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lessons_doc(numbers: &[i64]) -> Value {
        json!({
            "lessons": numbers
                .iter()
                .map(|n| json!({ "number": n, "pages": [] }))
                .collect::<Vec<_>>()
        })
    }

    fn numbers(db: &LessonDatabase) -> Vec<i64> {
        db.lessons().iter().filter_map(|l| l.number).collect()
    }

    fn resources(names: &[&str]) -> Sources {
        Sources::from_locations(names.iter().copied())
    }

    #[tokio::test]
    async fn merges_and_sorts_all_documents() {
        let fetcher = MockFetcher::new()
            .with_document("a.json", lessons_doc(&[5, 1, 3]))
            .with_document("b.json", lessons_doc(&[2, 4]));
        let loader = DatabaseLoader::new(Arc::new(fetcher));

        let db = loader.load(&resources(&["a.json", "b.json"])).await.unwrap();
        assert_eq!(numbers(&db), vec![1, 2, 3, 4, 5]);

        let db = loader.load(&resources(&["b.json", "a.json"])).await.unwrap();
        assert_eq!(numbers(&db), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn failed_source_is_skipped() {
        let fetcher = MockFetcher::new()
            .with_failure("a.json", "boom")
            .with_document("b.json", lessons_doc(&[2, 4]));
        let loader = DatabaseLoader::new(Arc::new(fetcher));

        let db = loader.load(&resources(&["a.json", "b.json"])).await.unwrap();
        assert_eq!(numbers(&db), vec![2, 4]);
    }

    #[tokio::test]
    async fn all_sources_failing_yields_empty_database() {
        let fetcher = MockFetcher::new()
            .with_failure("a.json", "boom")
            .with_document("b.json", json!({ "words": [] }));
        let loader = DatabaseLoader::new(Arc::new(fetcher));

        let db = loader.load(&resources(&["a.json", "b.json"])).await.unwrap();
        assert!(db.is_empty());
    }

    #[tokio::test]
    async fn no_sources_is_an_error() {
        let loader = DatabaseLoader::new(Arc::new(MockFetcher::new()));
        let err = loader.load(&Sources::Resources(vec![])).await.unwrap_err();
        assert!(matches!(err, LoadError::NoSources));
    }

    #[tokio::test]
    async fn embedded_document_skips_fetching() {
        let fetcher = Arc::new(MockFetcher::new());
        let loader = DatabaseLoader::new(fetcher.clone());

        let embedded = Sources::Embedded(lessons_doc(&[3, 1]).to_string());
        let db = loader.load(&embedded).await.unwrap();
        assert_eq!(numbers(&db), vec![1, 3]);
        assert_eq!(fetcher.call_count(), 0);

        let err = loader
            .load(&Sources::Embedded("not json".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidEmbedded(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn merge_order_follows_input_not_completion() {
        let first = json!({ "lessons": [{ "number": 1, "name": "slow" }] });
        let second = json!({ "lessons": [{ "number": 1, "name": "fast" }] });
        let fetcher = MockFetcher::new()
            .with_document("slow.json", first)
            .with_delay("slow.json", Duration::from_secs(2))
            .with_document("fast.json", second);
        let loader = DatabaseLoader::new(Arc::new(fetcher));

        let db = loader
            .load(&resources(&["slow.json", "fast.json"]))
            .await
            .unwrap();
        let names: Vec<&str> = db
            .lessons()
            .iter()
            .filter_map(|l| l.name.as_deref())
            .collect();
        assert_eq!(names, vec!["slow", "fast"]);
    }

    #[tokio::test]
    async fn loads_over_http_with_partial_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/db-1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(lessons_doc(&[3, 1])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/db-2.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let loader = DatabaseLoader::with_default_fetcher(None).unwrap();
        let sources = Sources::Resources(vec![
            Resource::Url(format!("{}/db-1.json", server.uri())),
            Resource::Url(format!("{}/db-2.json", server.uri())),
        ]);

        let db = loader.load(&sources).await.unwrap();
        assert_eq!(numbers(&db), vec![1, 3]);
    }
}
