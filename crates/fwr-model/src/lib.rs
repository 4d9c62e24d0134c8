//! Mapping model for fixed-width record parsing.
//!
//! A mapping describes how one physical fixed-width line splits into named
//! segments, and how each segment splits into typed fields by byte range.
//! The model is built once from the mapping source and shared read-only by
//! every line processed.

pub mod error;
pub mod field;
pub mod mapping;

pub use error::{ModelError, Result};
pub use field::{DataType, FieldSpec};
pub use mapping::{MappingModel, SegmentSchema};
