//! Tokenizing and joining
//!
//! Implements: split-by-index, join-with-delimiter, string arrays

use octofhir_hl7_derive_types::{FieldValue, joined_string_value, string_value};

/// The two-character escape for newline, as template engines tend to deliver it
const ESCAPED_NEWLINE: &str = "\\n";

/// Tokenize the input and return the token at the zero-based `index`.
///
/// Every character of `delimiters` separates tokens and empty tokens are
/// skipped, so `"a^^b"` split on `"^"` has the tokens `a` and `b`. Blank input
/// or an index past the last token yields `None`.
pub fn split(input: &FieldValue, delimiters: &str, index: usize) -> Option<String> {
    let text = string_value(input)?;
    text.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .nth(index)
        .map(str::to_string)
}

/// Join every repetition/component of the input with `delimiter`.
///
/// A delimiter given as the escape sequence `\n` (backslash, n) is turned into
/// a real newline first.
pub fn concatenate_with_char(input: &FieldValue, delimiter: &str) -> Option<String> {
    let delimiter = if delimiter == ESCAPED_NEWLINE { "\n" } else { delimiter };
    joined_string_value(input, delimiter)
}

/// Collect the inputs as strings, in order, skipping only null inputs.
///
/// Text is kept verbatim, blank text included. Other values use their string
/// value and are skipped when they have none.
pub fn make_string_array<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a FieldValue>,
{
    values
        .into_iter()
        .filter_map(|value| match value {
            FieldValue::Text(s) => Some(s.clone()),
            other => string_value(other),
        })
        .collect()
}
