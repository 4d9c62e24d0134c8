//! Record dispatch: one line through every segment.

use std::borrow::Cow;

use fwr_model::MappingModel;

use crate::segment::{ParsedSegment, parse_segment};

/// A record/segment that failed validation, bound for quarantine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantineEntry {
    /// Index into the model's segment list.
    pub segment_index: usize,
    /// The failing segment's own values, in schema order.
    pub values: Vec<String>,
    /// The original line, right-trimmed.
    pub raw_data: String,
    /// Failure reasons joined with `"; "` in field order.
    pub comment: String,
}

/// Everything one input line produced: one parsed segment per mapped
/// segment (model order), plus zero or more quarantine entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub segments: Vec<ParsedSegment>,
    pub quarantined: Vec<QuarantineEntry>,
}

/// Right-pads a line with spaces to the mapping's width.
///
/// Longer lines pass through untouched; content beyond the last mapped
/// field is simply never read.
pub fn pad_line(line: &str, width: usize) -> Cow<'_, str> {
    if line.len() >= width {
        Cow::Borrowed(line)
    } else {
        let mut padded = String::with_capacity(width);
        padded.push_str(line);
        padded.extend(std::iter::repeat_n(' ', width - line.len()));
        Cow::Owned(padded)
    }
}

/// Drives one raw line through every segment of the mapping.
///
/// Segments are independent sub-records sharing the physical line, so
/// every segment is parsed regardless of earlier failures. Each segment
/// with a non-empty reason list yields a quarantine entry carrying only
/// that segment's fields; a single line may therefore produce zero, one,
/// or several entries.
pub fn process_line(raw_line: &str, model: &MappingModel) -> LineOutcome {
    let line = pad_line(raw_line, model.line_width());

    let mut segments = Vec::with_capacity(model.segments().len());
    let mut quarantined = Vec::new();
    for (index, schema) in model.segments().iter().enumerate() {
        let parsed = parse_segment(&line, schema);
        if !parsed.is_clean() {
            quarantined.push(QuarantineEntry {
                segment_index: index,
                values: parsed.values.clone(),
                raw_data: raw_line.trim_end().to_string(),
                comment: parsed.reasons.join("; "),
            });
        }
        segments.push(parsed);
    }

    LineOutcome {
        segments,
        quarantined,
    }
}
