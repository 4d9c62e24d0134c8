//! Error types for output routing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while creating or writing output sinks.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sink file could not be created.
    #[error("failed to create {path}: {source}")]
    CreateSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row or header failed to write.
    #[error("failed to write to {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// A write was attempted after the sink was closed.
    #[error("sink already closed: {path}")]
    Closed { path: PathBuf },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
