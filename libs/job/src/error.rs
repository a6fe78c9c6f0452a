//! Errors for reading job documents.

use thiserror::Error;

/// A job document could not be read or decoded.
///
/// Semantic problems with a well-formed job are not errors; they are reported
/// as violations by the admission validator.
#[derive(Debug, Error)]
pub enum JobFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid job JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("invalid job TOML: {0}")]
    Toml(#[source] toml::de::Error),
}
