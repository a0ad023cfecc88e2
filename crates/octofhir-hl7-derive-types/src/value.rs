//! Field and derived value types
//!
//! `FieldValue` is the runtime representation of a single extracted field as the
//! calling pipeline hands it over. `DerivedValue` is what a rule produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::segment::Segment;

/// An extracted field value, prior to any semantic interpretation.
///
/// Callers may hand over plain text or one of the thin wrappers below. Rules never
/// look at the wrapper directly; they go through the coercion helpers in
/// [`crate::coercion`] once at entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FieldValue {
    /// Field not present in the message
    #[default]
    Null,
    /// Textual value (may be blank)
    Text(String),
    /// Numeric value delivered as an integer
    Integer(i64),
    /// Numeric value delivered as a decimal
    Decimal(Decimal),
    /// A repeating field, one entry per repetition
    Repeated(Vec<FieldValue>),
    /// A composite datatype, one entry per component
    Components(Vec<FieldValue>),
    /// A whole segment, for rules that inspect field cardinality
    Segment(Segment),
}

impl FieldValue {
    /// Create a text value
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create a repeating field from its repetitions
    pub fn repeated<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        Self::Repeated(values.into_iter().map(Into::into).collect())
    }

    /// Create a composite value from its components
    pub fn components<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        Self::Components(values.into_iter().map(Into::into).collect())
    }

    /// Check if this value is absent.
    ///
    /// A blank text value is *not* null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value carries no usable text.
    pub fn is_blank(&self) -> bool {
        crate::coercion::string_value(self).is_none()
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Text(_) => "Text",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
            Self::Repeated(_) => "Repeated",
            Self::Components(_) => "Components",
            Self::Segment(_) => "Segment",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Repeated(values) => write_joined(f, values, "~"),
            Self::Components(values) => write_joined(f, values, "^"),
            Self::Segment(segment) => write!(f, "{}", segment.name()),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, values: &[FieldValue], separator: &str) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "]")
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<Decimal> for FieldValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<Segment> for FieldValue {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Result of a derivation rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DerivedValue {
    /// Nothing could be derived
    #[default]
    Null,
    /// Textual result
    Text(String),
    /// Integer result (elapsed minutes)
    Integer(i64),
    /// List of strings
    List(Vec<String>),
}

impl DerivedValue {
    /// Check if nothing was derived
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Integer content, if this is an integer result
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for DerivedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<String> for DerivedValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DerivedValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<Vec<String>> for DerivedValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<DerivedValue>> From<Option<T>> for DerivedValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
