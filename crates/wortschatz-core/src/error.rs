//! Load error types.
//!
//! A `LoadError` means no usable database could be produced at all.
//! Individual source failures never surface here; the loader recovers
//! from those locally.

use thiserror::Error;

/// Errors that abort a database load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Neither an embedded document nor any resource was configured.
    #[error("no database sources configured")]
    NoSources,

    /// The embedded document could not be parsed as JSON.
    #[error("embedded database is not valid JSON: {0}")]
    InvalidEmbedded(#[from] serde_json::Error),

    /// The embedded document could not be read.
    #[error("failed to read embedded database {path}: {message}")]
    EmbeddedUnreadable { path: String, message: String },
}

impl LoadError {
    /// Static message shown to the user when loading fails.
    pub const USER_MESSAGE: &'static str =
        "Fehler beim Laden: Datenbank konnte nicht geladen werden.";
}
