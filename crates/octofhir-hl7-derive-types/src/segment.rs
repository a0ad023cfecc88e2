//! Segment access
//!
//! Some rules need to know how many repetitions a field of the enclosing segment
//! carries (e.g. PID-11 when deriving an address district). Inspecting the
//! structure may fail, so the capability returns a `Result` instead of panicking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::FieldValue;

/// Errors raised while inspecting segment structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// The value handed over is not a segment
    #[error("Expected a segment, found {found}")]
    NotASegment { found: String },

    /// Field positions are 1-based
    #[error("Invalid field index {index} for segment {segment}")]
    InvalidFieldIndex { segment: String, index: usize },
}

/// Result type for structural access
pub type StructuralResult<T> = Result<T, StructuralError>;

/// Capability to inspect the cardinality of a segment field.
pub trait SegmentAccess {
    /// Number of repetitions present in the field at the 1-based `field` position.
    fn repetition_count(&self, field: usize) -> StructuralResult<usize>;
}

/// A thin segment wrapper: its name and its fields in order (field 1 first).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    name: String,
    fields: Vec<FieldValue>,
}

impl Segment {
    /// Create an empty segment
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Create a segment from its fields
    pub fn with_fields(name: impl Into<String>, fields: Vec<FieldValue>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Set the field at a 1-based position, padding with nulls as needed.
    ///
    /// Position 0 is ignored.
    pub fn set_field(&mut self, position: usize, value: impl Into<FieldValue>) {
        if position == 0 {
            return;
        }
        if self.fields.len() < position {
            self.fields.resize(position, FieldValue::Null);
        }
        self.fields[position - 1] = value.into();
    }

    /// Builder-style variant of [`Segment::set_field`]
    pub fn field(mut self, position: usize, value: impl Into<FieldValue>) -> Self {
        self.set_field(position, value);
        self
    }

    /// Segment name (e.g. "PID")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field at a 1-based position
    pub fn get(&self, position: usize) -> Option<&FieldValue> {
        position.checked_sub(1).and_then(|i| self.fields.get(i))
    }
}

impl SegmentAccess for Segment {
    fn repetition_count(&self, field: usize) -> StructuralResult<usize> {
        if field == 0 {
            return Err(StructuralError::InvalidFieldIndex {
                segment: self.name.clone(),
                index: field,
            });
        }
        Ok(self.get(field).map_or(0, repetitions))
    }
}

impl SegmentAccess for FieldValue {
    fn repetition_count(&self, field: usize) -> StructuralResult<usize> {
        match self {
            FieldValue::Segment(segment) => segment.repetition_count(field),
            other => Err(StructuralError::NotASegment {
                found: other.kind().to_string(),
            }),
        }
    }
}

fn repetitions(value: &FieldValue) -> usize {
    match value {
        FieldValue::Null => 0,
        FieldValue::Repeated(values) => values.len(),
        _ => 1,
    }
}
