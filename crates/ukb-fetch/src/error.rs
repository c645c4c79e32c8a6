//! Error types for schema fetching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a schema fetch run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Request could not be sent or its body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// A schema link without a numeric id.
    #[error("schema link has no numeric id: {href}")]
    MissingSchemaId { href: String },

    /// Failed to write a schema file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
