//! Per-source fetch errors.
//!
//! The loader recovers from all of these: a failed source is logged and
//! treated as contributing no lessons.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while fetching a single database document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The request timed out.
    #[error("request to {url} timed out after {}ms", .timeout.as_millis())]
    Timeout { url: String, timeout: Duration },

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// A local file could not be read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// The body was not valid JSON.
    #[error("invalid JSON in {location}: {message}")]
    InvalidJson { location: String, message: String },
}
