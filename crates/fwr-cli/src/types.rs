//! Result types shared by the CLI pipeline and summary printing.

use std::path::PathBuf;

use fwr_output::SegmentStats;

/// Outcome of one `parse` run.
#[derive(Debug)]
pub struct ParseSummary {
    /// Input file that was parsed.
    pub input: PathBuf,
    /// Directory the outputs were written to.
    pub output_dir: PathBuf,
    /// True when no files were written.
    pub dry_run: bool,
    /// Lines read from the input.
    pub lines: usize,
    /// Quarantine entries across all segments.
    pub quarantined: usize,
    /// Per-segment statistics, in mapping order.
    pub segments: Vec<SegmentStats>,
}
