//! Value coercion
//!
//! Every derivation rule reduces its inputs to plain text exactly once, at entry,
//! through the functions in this module:
//! - Null and blank (all-whitespace) text become `None`
//! - Text is trimmed
//! - Numbers are rendered in their canonical decimal form
//! - Repeating fields yield their first valued repetition, composites their first
//!   component (the identifier in most HL7 datatypes)
//! - Segments have no scalar form

use crate::value::FieldValue;

/// Canonical string form of a field value, or `None` when it carries no text.
pub fn string_value(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Null | FieldValue::Segment(_) => None,
        FieldValue::Text(s) => non_blank(s),
        FieldValue::Integer(i) => Some(i.to_string()),
        FieldValue::Decimal(d) => Some(d.to_string()),
        FieldValue::Repeated(values) | FieldValue::Components(values) => {
            values.iter().find_map(string_value)
        }
    }
}

/// String form of a field value with every repetition and component joined by
/// `delimiter`.
///
/// Absent elements are skipped rather than producing empty slots. Returns `None`
/// when nothing remains.
pub fn joined_string_value(value: &FieldValue, delimiter: &str) -> Option<String> {
    match value {
        FieldValue::Repeated(values) | FieldValue::Components(values) => {
            let parts: Vec<String> = values
                .iter()
                .filter_map(|v| joined_string_value(v, delimiter))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(delimiter))
            }
        }
        other => string_value(other),
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
