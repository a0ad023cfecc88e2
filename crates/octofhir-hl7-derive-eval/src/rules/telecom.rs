//! Telephone number display formatting (XTN)
//!
//! Builds a readable number from the XTN components:
//!
//! ```text
//! +22 123 456 7890 ext. 12    country, area, local and extension
//! (123) 456 7890              area and local
//! 456 7890                    local only
//! ```
//!
//! Without a local number the unformatted number (XTN-12) is used, then the
//! legacy string (XTN-1).

use octofhir_hl7_derive_types::{FieldValue, string_value};

/// Position after which the local number gets its separating space
const LOCAL_SPLIT: usize = 3;

/// Format a telephone number from its XTN components.
///
/// Returns `""` when nothing is available.
pub fn format_telecom_number(
    xtn1_old: &FieldValue,
    xtn5_country: &FieldValue,
    xtn6_area: &FieldValue,
    xtn7_local: &FieldValue,
    xtn8_extension: &FieldValue,
    xtn12_unformatted: &FieldValue,
) -> String {
    if let Some(local) = string_value(xtn7_local) {
        let mut formatted = country_and_area(string_value(xtn5_country), string_value(xtn6_area));
        formatted.push_str(&format_local_number(&local));
        if let Some(extension) = string_value(xtn8_extension) {
            formatted.push_str(" ext. ");
            formatted.push_str(&extension);
        }
        formatted
    } else if let Some(unformatted) = string_value(xtn12_unformatted) {
        unformatted
    } else {
        string_value(xtn1_old).unwrap_or_default()
    }
}

/// "+{country} {area} " with both, "({area}) " with area only, nothing without area
fn country_and_area(country: Option<String>, area: Option<String>) -> String {
    match (country, area) {
        (Some(country), Some(area)) => format!("+{country} {area} "),
        (None, Some(area)) => format!("({area}) "),
        (_, None) => String::new(),
    }
}

/// "1234567" becomes "123 4567". Numbers too short to split are kept as they are.
fn format_local_number(local: &str) -> String {
    match local.char_indices().nth(LOCAL_SPLIT) {
        Some((at, _)) => format!("{} {}", &local[..at], &local[at..]),
        None => local.to_string(),
    }
}
