//! Error types for mapping and input ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the mapping or reading input.
///
/// All of these are fatal: nothing downstream can be trusted once the
/// mapping is malformed or the input is unreadable.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV in the mapping source.
    #[error("failed to parse mapping {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Required column not found in the mapping header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A mapping cell failed to parse as the expected primitive.
    #[error("invalid {field} value '{value}' in {path} (row {row})")]
    InvalidValue {
        field: String,
        value: String,
        row: usize,
        path: PathBuf,
    },

    /// The assembled field specs violate a model invariant.
    #[error("invalid mapping in {path}: {source}")]
    Mapping {
        path: PathBuf,
        #[source]
        source: fwr_model::ModelError,
    },
}

impl IngestError {
    /// Maps a file-open failure, distinguishing not-found from other I/O.
    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
