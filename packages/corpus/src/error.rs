//! Typed errors for the corpus library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the worker
//! binaries can decide how to report them.

use thiserror::Error;

/// Errors that can occur while reading or writing the shared store.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Filesystem operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A named record does not exist in the store
    #[error("not found: {name}")]
    NotFound { name: String },

    /// Configuration value is unusable
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl CorpusError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a not-found error for a store entry.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
