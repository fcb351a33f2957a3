//! Error types for the phbar pipeline and its I/O

use std::path::PathBuf;

use phbar_core::PhbarError;
use thiserror::Error;

/// Errors raised outside the pure core
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Core precondition or parse failure
    #[error(transparent)]
    Core(#[from] PhbarError),

    /// JSON encoding or decoding failed
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for phbar operations
pub type Result<T> = std::result::Result<T, Error>;
