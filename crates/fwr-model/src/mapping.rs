//! Segment schemas and the full mapping model.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::FieldSpec;

/// An ordered sequence of fields sharing one segment name.
///
/// Field order is the order of first appearance in the mapping source and
/// fixes both the parse order and the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSchema {
    /// Segment name as given in the mapping source.
    pub name: String,
    /// Fields in mapping-source order.
    pub fields: Vec<FieldSpec>,
}

impl SegmentSchema {
    /// Output field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

/// The complete column schema, grouped by segment.
///
/// Built once at startup and immutable thereafter; safe to share read-only
/// across any number of line-processing passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingModel {
    segments: Vec<SegmentSchema>,
    line_width: usize,
}

impl MappingModel {
    /// Groups flat field specs into segments, preserving first-appearance
    /// order for both segments and fields.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Empty`] for an empty field list,
    /// [`ModelError::InvalidRange`] when `start >= end`, and
    /// [`ModelError::DuplicateField`] when a segment declares the same
    /// field name twice (the emitted record would silently lose a value).
    pub fn from_fields(fields: Vec<FieldSpec>) -> Result<Self> {
        if fields.is_empty() {
            return Err(ModelError::Empty);
        }

        let mut segments: Vec<SegmentSchema> = Vec::new();
        let mut line_width = 0usize;
        for field in fields {
            if field.start >= field.end {
                return Err(ModelError::InvalidRange {
                    segment: field.segment,
                    field: field.name,
                    start: field.start,
                    end: field.end,
                });
            }
            line_width = line_width.max(field.end);

            let index = match segments.iter().position(|s| s.name == field.segment) {
                Some(index) => index,
                None => {
                    segments.push(SegmentSchema {
                        name: field.segment.clone(),
                        fields: Vec::new(),
                    });
                    segments.len() - 1
                }
            };
            let schema = &mut segments[index];
            if schema.fields.iter().any(|f| f.name == field.name) {
                return Err(ModelError::DuplicateField {
                    segment: field.segment,
                    field: field.name,
                });
            }
            schema.fields.push(field);
        }

        Ok(Self {
            segments,
            line_width,
        })
    }

    /// Segments in first-appearance order.
    pub fn segments(&self) -> &[SegmentSchema] {
        &self.segments
    }

    /// Looks up a segment schema by name.
    pub fn segment(&self, name: &str) -> Option<&SegmentSchema> {
        self.segments.iter().find(|s| s.name == name)
    }

    /// Width every input line is padded to before slicing: the maximum
    /// `end` offset across all fields.
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Total mapped field count across all segments.
    pub fn field_count(&self) -> usize {
        self.segments.iter().map(|s| s.fields.len()).sum()
    }
}
