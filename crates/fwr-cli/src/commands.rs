//! Subcommand entry points.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use fwr_ingest::load_mapping;

use crate::cli::{ParseArgs, SegmentsArgs};
use crate::pipeline::{ParseOptions, run_parse as run_pipeline};
use crate::types::ParseSummary;

/// Runs the `parse` subcommand.
pub fn run_parse(args: &ParseArgs) -> Result<ParseSummary> {
    run_pipeline(&ParseOptions {
        input: &args.input,
        mapping: &args.mapping,
        output_dir: &args.output_dir,
        quarantine_stem: &args.quarantine_stem,
        dry_run: args.dry_run,
    })
}

/// Runs the `segments` subcommand: prints the mapping layout.
pub fn run_segments(args: &SegmentsArgs) -> Result<()> {
    let model = load_mapping(&args.mapping).context("load mapping")?;

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Segment").add_attribute(Attribute::Bold),
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Start").add_attribute(Attribute::Bold),
        Cell::new("End").add_attribute(Attribute::Bold),
        Cell::new("Width").add_attribute(Attribute::Bold),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 3..6 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for schema in model.segments() {
        for field in &schema.fields {
            table.add_row(vec![
                Cell::new(&schema.name),
                Cell::new(&field.name),
                Cell::new(field.data_type),
                Cell::new(field.start),
                Cell::new(field.end),
                Cell::new(field.width()),
            ]);
        }
    }
    println!("{table}");
    println!(
        "{} segment(s), {} field(s), line width {}",
        model.segments().len(),
        model.field_count(),
        model.line_width()
    );
    Ok(())
}
