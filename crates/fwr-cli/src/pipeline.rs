//! Parse pipeline with explicit stages.
//!
//! 1. **Load mapping**: read and validate the column mapping CSV
//! 2. **Route**: open the sink registry for every mapped segment
//! 3. **Process**: drive each input line through every segment,
//!    appending per-segment rows and quarantine entries
//! 4. **Close**: flush and release every sink exactly once
//!
//! Validation failures never abort the pipeline; they are recorded as
//! quarantine entries and the run still succeeds.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use fwr_engine::process_line;
use fwr_ingest::{LineReader, load_mapping};
use fwr_model::MappingModel;
use fwr_output::{OutputRouter, SegmentStats, quarantine_output_path, segment_output_path};

use crate::types::ParseSummary;

/// Input for one `parse` run.
pub struct ParseOptions<'a> {
    pub input: &'a Path,
    pub mapping: &'a Path,
    pub output_dir: &'a Path,
    pub quarantine_stem: &'a str,
    pub dry_run: bool,
}

/// Runs the full pipeline: mapping load, line processing, sink routing.
pub fn run_parse(options: &ParseOptions<'_>) -> Result<ParseSummary> {
    let model = load_model(options.mapping)?;

    let process_span = info_span!("process", input = %options.input.display());
    let _process_guard = process_span.enter();
    let process_start = Instant::now();

    let summary = if options.dry_run {
        process_dry(options, &model)?
    } else {
        process_to_sinks(options, &model)?
    };

    info!(
        lines = summary.lines,
        quarantined = summary.quarantined,
        duration_ms = process_start.elapsed().as_millis(),
        dry_run = summary.dry_run,
        "parse complete"
    );
    Ok(summary)
}

fn load_model(mapping: &Path) -> Result<MappingModel> {
    info_span!("load_mapping", path = %mapping.display()).in_scope(|| {
        let start = Instant::now();
        let model = load_mapping(mapping).context("load mapping")?;
        debug!(
            segments = model.segments().len(),
            fields = model.field_count(),
            line_width = model.line_width(),
            duration_ms = start.elapsed().as_millis(),
            "mapping loaded"
        );
        Ok(model)
    })
}

/// Normal run: every line is routed to the segment and quarantine sinks.
fn process_to_sinks(options: &ParseOptions<'_>, model: &MappingModel) -> Result<ParseSummary> {
    let mut router = OutputRouter::new(model, options.output_dir, options.quarantine_stem)
        .context("open output sinks")?;
    let reader = LineReader::open(options.input).context("open input")?;

    let mut lines = 0usize;
    for (index, line) in reader.enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("read line {line_number}"))?;
        let outcome = process_line(&line, model);
        router
            .write_line(&outcome)
            .with_context(|| format!("write line {line_number}"))?;
        lines += 1;
    }

    router.close().context("close output sinks")?;
    Ok(ParseSummary {
        input: options.input.to_path_buf(),
        output_dir: options.output_dir.to_path_buf(),
        dry_run: false,
        lines,
        quarantined: router.quarantined(),
        segments: router.stats(),
    })
}

/// Dry run: identical parsing and counting, no files touched.
fn process_dry(options: &ParseOptions<'_>, model: &MappingModel) -> Result<ParseSummary> {
    let reader = LineReader::open(options.input).context("open input")?;

    let mut lines = 0usize;
    let mut quarantined_per_segment = vec![0usize; model.segments().len()];
    for (index, line) in reader.enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("read line {line_number}"))?;
        let outcome = process_line(&line, model);
        for entry in &outcome.quarantined {
            quarantined_per_segment[entry.segment_index] += 1;
        }
        lines += 1;
    }

    let segments = model
        .segments()
        .iter()
        .zip(&quarantined_per_segment)
        .map(|(schema, &quarantined)| SegmentStats {
            segment: schema.name.clone(),
            fields: schema.fields.len(),
            rows: lines,
            quarantined,
            output_path: segment_output_path(options.output_dir, &schema.name),
            quarantine_path: (quarantined > 0).then(|| {
                quarantine_output_path(options.output_dir, options.quarantine_stem, &schema.name)
            }),
        })
        .collect();

    Ok(ParseSummary {
        input: options.input.to_path_buf(),
        output_dir: options.output_dir.to_path_buf(),
        dry_run: true,
        lines,
        quarantined: quarantined_per_segment.iter().sum(),
        segments,
    })
}
