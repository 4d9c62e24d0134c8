use thiserror::Error;

/// Errors raised while assembling a [`crate::MappingModel`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The mapping source produced no fields at all.
    #[error("mapping contains no fields")]
    Empty,

    /// A field's byte range is inverted or zero-width.
    #[error("field '{field}' in segment '{segment}' has invalid range {start}..{end}")]
    InvalidRange {
        segment: String,
        field: String,
        start: usize,
        end: usize,
    },

    /// Two fields in the same segment share a name.
    #[error("duplicate field '{field}' in segment '{segment}'")]
    DuplicateField { segment: String, field: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
