//! wortschatz-loader: Database loading.
//!
//! Fetches database documents concurrently over HTTP or from local files,
//! tolerates individual failures, and merges the valid documents into one
//! ordered `LessonDatabase`.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod mock;
pub mod source;

pub use config::{load_config_from, WortschatzConfig};
pub use error::FetchError;
pub use fetcher::{DefaultFetcher, DocumentFetcher};
pub use loader::DatabaseLoader;
pub use source::{Resource, Sources};
