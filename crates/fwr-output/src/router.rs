//! Routing of parsed lines to per-segment and quarantine sinks.

use std::path::{Path, PathBuf};

use fwr_engine::LineOutcome;
use fwr_model::MappingModel;

use crate::error::{OutputError, Result};
use crate::sink::CsvSink;

/// Per-segment write statistics for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentStats {
    pub segment: String,
    pub fields: usize,
    pub rows: usize,
    pub quarantined: usize,
    pub output_path: PathBuf,
    /// Present only when at least one entry was quarantined.
    pub quarantine_path: Option<PathBuf>,
}

/// Owns every output sink of a run: one segment sink plus one quarantine
/// sink per mapped segment.
///
/// The registry is enumerated from the immutable [`MappingModel`] before
/// any line is processed, so sink schemas are fixed up front and cannot
/// drift with the data. Quarantine headers are the segment's field names
/// plus `raw_data` and `comment`.
pub struct OutputRouter {
    segment_names: Vec<String>,
    segment_sinks: Vec<CsvSink>,
    quarantine_sinks: Vec<CsvSink>,
}

impl OutputRouter {
    /// Builds the sink registry, creating the output directory if needed.
    pub fn new(model: &MappingModel, output_dir: &Path, quarantine_stem: &str) -> Result<Self> {
        std::fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut segment_names = Vec::new();
        let mut segment_sinks = Vec::new();
        let mut quarantine_sinks = Vec::new();
        for schema in model.segments() {
            let header: Vec<String> = schema.field_names().map(String::from).collect();

            let output_path = segment_output_path(output_dir, &schema.name);
            segment_sinks.push(CsvSink::new(output_path, header.clone()));

            let mut quarantine_header = header;
            quarantine_header.push("raw_data".to_string());
            quarantine_header.push("comment".to_string());
            let quarantine_path = quarantine_output_path(output_dir, quarantine_stem, &schema.name);
            quarantine_sinks.push(CsvSink::new(quarantine_path, quarantine_header));

            segment_names.push(schema.name.clone());
        }

        Ok(Self {
            segment_names,
            segment_sinks,
            quarantine_sinks,
        })
    }

    /// Routes one line's outcome: every segment record to its own sink,
    /// every quarantine entry to its segment's quarantine sink.
    pub fn write_line(&mut self, outcome: &LineOutcome) -> Result<()> {
        debug_assert_eq!(outcome.segments.len(), self.segment_sinks.len());
        for (sink, parsed) in self.segment_sinks.iter_mut().zip(&outcome.segments) {
            sink.write_row(&parsed.values)?;
        }
        for entry in &outcome.quarantined {
            let sink = &mut self.quarantine_sinks[entry.segment_index];
            let row = entry
                .values
                .iter()
                .map(String::as_str)
                .chain([entry.raw_data.as_str(), entry.comment.as_str()]);
            sink.write_row(row)?;
        }
        Ok(())
    }

    /// Total quarantine entries written so far.
    pub fn quarantined(&self) -> usize {
        self.quarantine_sinks.iter().map(CsvSink::rows).sum()
    }

    /// Closes every sink exactly once, flushing buffers.
    pub fn close(&mut self) -> Result<()> {
        for sink in self
            .segment_sinks
            .iter_mut()
            .chain(self.quarantine_sinks.iter_mut())
        {
            sink.close()?;
        }
        Ok(())
    }

    /// Per-segment statistics, in model order.
    pub fn stats(&self) -> Vec<SegmentStats> {
        self.segment_names
            .iter()
            .zip(self.segment_sinks.iter().zip(&self.quarantine_sinks))
            .map(|(name, (sink, quarantine))| SegmentStats {
                segment: name.clone(),
                fields: sink.header_len(),
                rows: sink.rows(),
                quarantined: quarantine.rows(),
                output_path: sink.path().to_path_buf(),
                quarantine_path: (quarantine.rows() > 0)
                    .then(|| quarantine.path().to_path_buf()),
            })
            .collect()
    }
}

impl Drop for OutputRouter {
    /// Safe-abort flush: a run unwinding on error still leaves whatever
    /// was already written in a consistent, flushed state.
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            tracing::warn!(%error, "failed to flush sinks on drop");
        }
    }
}

/// Deterministic output file path for a segment.
pub fn segment_output_path(output_dir: &Path, segment: &str) -> PathBuf {
    output_dir.join(format!("parsed_{}_output.csv", segment_slug(segment)))
}

/// Deterministic quarantine file path for a segment.
pub fn quarantine_output_path(output_dir: &Path, stem: &str, segment: &str) -> PathBuf {
    output_dir.join(format!("{stem}_{}.csv", segment_slug(segment)))
}

/// Deterministic file-name fragment for a segment.
fn segment_slug(name: &str) -> String {
    name.to_lowercase()
}
