//! Field-level mapping types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data type of a mapped field, driving validation.
///
/// Parsed case-insensitively from the mapping's `datatype` column. Any
/// unrecognized value falls back to [`DataType::Raw`], which passes the
/// extracted substring through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// ASCII letters and spaces only.
    Text,
    /// ASCII digits only, non-empty.
    Integer,
    /// Six digits `YYMMDD`, reformatted to `YYYY-MM-DD` on success.
    Date,
    /// Opaque passthrough.
    Raw,
}

impl DataType {
    /// Parses a datatype label from the mapping source.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "integer" => Self::Integer,
            "date" => Self::Date,
            _ => Self::Raw,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::Raw => "raw",
        };
        f.write_str(label)
    }
}

/// One mapped column: a named byte range within a segment.
///
/// Offsets are 0-based byte positions into the fixed-width line; `start` is
/// inclusive, `end` exclusive. The invariant `start < end` is established
/// when the [`crate::MappingModel`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Segment this field belongs to.
    pub segment: String,
    /// Output field name, unique within its segment.
    pub name: String,
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    /// Data type driving validation.
    pub data_type: DataType,
}

impl FieldSpec {
    pub fn new(
        segment: impl Into<String>,
        name: impl Into<String>,
        start: usize,
        end: usize,
        data_type: DataType,
    ) -> Self {
        Self {
            segment: segment.into(),
            name: name.into(),
            start,
            end,
            data_type,
        }
    }

    /// Field width in bytes.
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_labels() {
        assert_eq!(DataType::parse("text"), DataType::Text);
        assert_eq!(DataType::parse("Integer"), DataType::Integer);
        assert_eq!(DataType::parse(" DATE "), DataType::Date);
    }

    #[test]
    fn unrecognized_label_is_raw() {
        assert_eq!(DataType::parse("varchar"), DataType::Raw);
        assert_eq!(DataType::parse(""), DataType::Raw);
    }

    #[test]
    fn field_width() {
        let field = FieldSpec::new("bio", "first_name", 0, 20, DataType::Text);
        assert_eq!(field.width(), 20);
    }

    #[test]
    fn data_type_serializes_lowercase() {
        let json = serde_json::to_string(&DataType::Date).expect("serialize");
        assert_eq!(json, "\"date\"");
    }
}
