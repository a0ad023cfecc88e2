//! Reference range bounds
//!
//! Reference ranges arrive as free text ("649-1346 cells/mcL", "<0.50",
//! "1.1 mL - 1.5 mL"). Only the first two runs of digits and decimal points are
//! considered; comparators, units and separators are ignored.
//!
//! Two numbers are a low and a high bound. A single number is always the high
//! bound: for a toxic substance the only limit given is the toxic (upper) one.
//! This means ">0.50", "<0.50" and "-0.50" all yield a high of "0.50", and
//! "=" is not treated as a comparator either.

use log::debug;
use octofhir_hl7_derive_types::{FieldValue, string_value};
use once_cell::sync::Lazy;
use regex::Regex;

// Lazy non-digit prefix, first numeric run, non-digit gap, optional second run.
static FIRST_TWO_NUMBERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^0-9]*?([0-9.]+)[^0-9]*([0-9.]*)").expect("range pattern is valid")
});

/// The two numeric candidates found in a range text
#[derive(Debug, Clone, PartialEq, Eq)]
struct RangeCandidates {
    first: String,
    second: Option<String>,
}

fn candidates(input: &FieldValue) -> Option<RangeCandidates> {
    let text = string_value(input)?;
    let Some(captures) = FIRST_TWO_NUMBERS.captures(&text) else {
        debug!("No numeric bound found in {text:?}");
        return None;
    };
    let first = captures.get(1)?.as_str().to_string();
    let second = captures
        .get(2)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Some(RangeCandidates { first, second })
}

/// Low bound of a range: the first number, only when a second one follows.
pub fn extract_low(input: &FieldValue) -> Option<String> {
    candidates(input).and_then(|c| c.second.map(|_| c.first))
}

/// High bound of a range: the second number if present, otherwise the only one.
pub fn extract_high(input: &FieldValue) -> Option<String> {
    candidates(input).map(|c| c.second.unwrap_or(c.first))
}
