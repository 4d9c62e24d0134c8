//! Mapping source loading.
//!
//! The mapping is a headered CSV with one row per mapped field:
//!
//! | column | meaning |
//! |---|---|
//! | `segment_name` | segment the field belongs to |
//! | `column_name` | output field name |
//! | `starting` | 0-based start offset in the physical line |
//! | `length` | field width in characters, > 0 |
//! | `datatype` | `text`, `integer`, `date`; anything else is raw |

use std::path::Path;

use fwr_model::{DataType, FieldSpec, MappingModel};

use crate::error::{IngestError, Result};

const COL_SEGMENT: &str = "segment_name";
const COL_NAME: &str = "column_name";
const COL_START: &str = "starting";
const COL_LENGTH: &str = "length";
const COL_DATATYPE: &str = "datatype";

/// Loads and validates the column mapping from a CSV file.
///
/// Segments and fields are discovered in file order. Offsets are derived
/// as `end = start + length`.
///
/// # Errors
///
/// Fails when the file is unreadable, a required column is missing, an
/// offset or length does not parse as a non-negative integer, a length is
/// zero, or a segment declares the same field name twice.
pub fn load_mapping(path: &Path) -> Result<MappingModel> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| {
            if path.exists() {
                IngestError::Csv {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            } else {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            }
        })?;

    let headers = reader
        .headers()
        .map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    let idx_segment = header_index(&headers, COL_SEGMENT).ok_or_else(|| missing(COL_SEGMENT, path))?;
    let idx_name = header_index(&headers, COL_NAME).ok_or_else(|| missing(COL_NAME, path))?;
    let idx_start = header_index(&headers, COL_START).ok_or_else(|| missing(COL_START, path))?;
    let idx_length = header_index(&headers, COL_LENGTH).ok_or_else(|| missing(COL_LENGTH, path))?;
    let idx_datatype =
        header_index(&headers, COL_DATATYPE).ok_or_else(|| missing(COL_DATATYPE, path))?;

    let mut fields = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = record.map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let segment = cell(&record, idx_segment);
        let name = cell(&record, idx_name);
        if segment.is_empty() {
            return Err(invalid(COL_SEGMENT, &segment, row, path));
        }
        if name.is_empty() {
            return Err(invalid(COL_NAME, &name, row, path));
        }

        let start_raw = cell(&record, idx_start);
        let start: usize = start_raw
            .parse()
            .map_err(|_| invalid(COL_START, &start_raw, row, path))?;

        let length_raw = cell(&record, idx_length);
        let length: usize = length_raw
            .parse()
            .map_err(|_| invalid(COL_LENGTH, &length_raw, row, path))?;
        if length == 0 {
            return Err(invalid(COL_LENGTH, &length_raw, row, path));
        }

        let data_type = DataType::parse(&cell(&record, idx_datatype));
        fields.push(FieldSpec::new(segment, name, start, start + length, data_type));
    }

    let model = MappingModel::from_fields(fields).map_err(|source| IngestError::Mapping {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        segments = model.segments().len(),
        fields = model.field_count(),
        line_width = model.line_width(),
        "mapping loaded"
    );

    Ok(model)
}

/// Finds a header position, tolerating a UTF-8 BOM on the first header.
fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim() == name)
}

fn cell(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

fn missing(column: &str, path: &Path) -> IngestError {
    IngestError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    }
}

fn invalid(field: &str, value: &str, row: usize, path: &Path) -> IngestError {
    IngestError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        row,
        path: path.to_path_buf(),
    }
}
