//! Person name assembly

use log::info;
use octofhir_hl7_derive_types::{FieldValue, string_value};

/// Join the valued name parts with single spaces, in the fixed order
/// prefix, given, middle, family, suffix.
///
/// Returns `None` when every part is absent or blank.
pub fn generate_name(
    prefix: &FieldValue,
    first: &FieldValue,
    middle: &FieldValue,
    family: &FieldValue,
    suffix: &FieldValue,
) -> Option<String> {
    info!(
        "Generating name from prefix {prefix}, first {first}, middle {middle}, family {family}, suffix {suffix}"
    );
    let parts: Vec<String> = [prefix, first, middle, family, suffix]
        .into_iter()
        .filter_map(string_value)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
