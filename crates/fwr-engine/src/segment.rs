//! Per-segment parsing of one physical line.

use fwr_model::SegmentSchema;

use crate::validate::validate_field;

/// One segment's parse result for one line.
///
/// `values` is parallel to the schema's field order; the record shape is
/// fixed by the mapping, not re-derived per row. `reasons` preserves field
/// order, which fixes the quarantine comment ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSegment {
    pub values: Vec<String>,
    pub reasons: Vec<String>,
}

impl ParsedSegment {
    /// True when every field of the segment validated cleanly.
    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Extracts and validates every field of `schema` from a pre-padded line.
///
/// The line must already be padded to at least the mapping's line width so
/// slicing stays in bounds. Each raw substring is trimmed of surrounding
/// whitespace before validation.
pub fn parse_segment(line: &str, schema: &SegmentSchema) -> ParsedSegment {
    let bytes = line.as_bytes();
    let mut values = Vec::with_capacity(schema.fields.len());
    let mut reasons = Vec::new();

    for field in &schema.fields {
        let raw = bytes.get(field.start..field.end).unwrap_or_default();
        let raw = String::from_utf8_lossy(raw);
        let validated = validate_field(field.data_type, &field.name, raw.trim());
        values.push(validated.value);
        if let Some(reason) = validated.reason {
            reasons.push(reason);
        }
    }

    ParsedSegment { values, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fwr_model::{DataType, FieldSpec, MappingModel};

    fn bio_schema() -> MappingModel {
        MappingModel::from_fields(vec![
            FieldSpec::new("bio", "first_name", 0, 20, DataType::Text),
            FieldSpec::new("bio", "last_name", 20, 40, DataType::Text),
            FieldSpec::new("bio", "dob", 40, 46, DataType::Date),
        ])
        .expect("build model")
    }

    #[test]
    fn parses_clean_line() {
        let model = bio_schema();
        let line = format!("{:<20}{:<20}881015", "John", "Smith");
        let parsed = parse_segment(&line, model.segment("bio").unwrap());
        assert_eq!(parsed.values, vec!["John", "Smith", "1988-10-15"]);
        assert!(parsed.is_clean());
    }

    #[test]
    fn collects_reasons_in_field_order() {
        let model = bio_schema();
        let line = format!("{:<20}{:<20}023099", "J0hn", "Sm!th");
        let parsed = parse_segment(&line, model.segment("bio").unwrap());
        assert_eq!(parsed.values, vec!["", "", ""]);
        assert_eq!(
            parsed.reasons,
            vec![
                "Invalid first_name (non-alpha or symbols)",
                "Invalid last_name (non-alpha or symbols)",
                "Invalid DOB",
            ]
        );
    }

    #[test]
    fn failed_field_does_not_disturb_neighbors() {
        let model = bio_schema();
        let line = format!("{:<20}{:<20}881015", "John", "Sm1th");
        let parsed = parse_segment(&line, model.segment("bio").unwrap());
        assert_eq!(parsed.values, vec!["John", "", "1988-10-15"]);
        assert_eq!(parsed.reasons.len(), 1);
    }
}
