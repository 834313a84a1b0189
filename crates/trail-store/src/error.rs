//! Error types for the log store.

use thiserror::Error;

/// Errors that can occur while setting up or persisting a log store.
///
/// Runtime persistence failures are absorbed by the mirror writer (logged,
/// never escalated); these variants surface only from fallible entry
/// points such as [`crate::LogStore::new`].
#[derive(Debug, Error)]
pub enum LogError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No platform user-data directory is available for the mirror file.
    #[error("no user data directory available for the mirror file")]
    DataDirUnavailable,
}

/// Result type alias for log store operations.
pub type Result<T> = std::result::Result<T, LogError>;
