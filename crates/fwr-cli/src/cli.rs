//! CLI argument definitions for the fixed-width record splitter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fwr",
    version,
    about = "Fixed-width record splitter - parse positional flat files into segmented CSV outputs",
    long_about = "Parse fixed-width positional text records into per-segment CSV outputs.\n\n\
                  Each input line is split into named segments according to a column\n\
                  mapping, fields are type-validated, and any segment that fails\n\
                  validation is copied to a quarantine file with the failure reasons."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a fixed-width input file into per-segment CSV outputs.
    Parse(ParseArgs),

    /// Show the segments and field layout of a mapping file.
    Segments(SegmentsArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the fixed-width input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the column mapping CSV.
    #[arg(long = "mapping", value_name = "CSV")]
    pub mapping: PathBuf,

    /// Output directory for generated files (default: parsed_output).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "parsed_output")]
    pub output_dir: PathBuf,

    /// File-name stem for per-segment quarantine files.
    ///
    /// A segment's failing records land in `<STEM>_<segment>.csv` next to
    /// the regular outputs. Segments with no failures produce no file.
    #[arg(
        long = "quarantine-stem",
        value_name = "STEM",
        default_value = "quarantined"
    )]
    pub quarantine_stem: String,

    /// Parse and report without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SegmentsArgs {
    /// Path to the column mapping CSV.
    #[arg(long = "mapping", value_name = "CSV")]
    pub mapping: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
