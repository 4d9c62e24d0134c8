//! Output routing for the fixed-width record splitter.
//!
//! One CSV sink per segment plus one quarantine sink per segment, all
//! registered from the mapping model before the first line is processed.

pub mod error;
mod router;
mod sink;

pub use error::{OutputError, Result};
pub use router::{OutputRouter, SegmentStats, quarantine_output_path, segment_output_path};
pub use sink::CsvSink;
