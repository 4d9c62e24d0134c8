//! Mapping-driven parsing and validation engine for fixed-width records.
//!
//! The engine is pure: it turns a raw fixed-width line plus a
//! [`fwr_model::MappingModel`] into typed, validated, segmented records
//! and the quarantine entries for whatever failed. Routing the results to
//! sinks is the output crate's job.

mod dispatch;
mod segment;
mod validate;

pub use dispatch::{LineOutcome, QuarantineEntry, pad_line, process_line};
pub use segment::{ParsedSegment, parse_segment};
pub use validate::{Validated, validate_field};
