//! Person Name Tests
//!
//! Tests for: generate_name

use octofhir_hl7_derive_eval::generate_name;
use octofhir_hl7_derive_types::FieldValue;
use rstest::rstest;

fn part(s: Option<&str>) -> FieldValue {
    s.map(FieldValue::text).unwrap_or(FieldValue::Null)
}

#[rstest]
#[case([Some("Dr"), Some("Patrick"), Some("J"), Some("Wood"), Some("Sr")], Some("Dr Patrick J Wood Sr"))]
#[case([None, Some("Jane"), None, Some("Doe"), None], Some("Jane Doe"))]
#[case([None, None, None, Some("Doe"), None], Some("Doe"))]
#[case([Some("Ms"), None, None, None, Some("PhD")], Some("Ms PhD"))]
#[case([None, Some(" Jane "), Some(""), Some("Doe"), None], Some("Jane Doe"))]
#[case([None, None, None, None, None], None)]
#[case([Some(""), Some("  "), None, None, None], None)]
fn test_generate_name(#[case] parts: [Option<&str>; 5], #[case] expected: Option<&str>) {
    let [prefix, first, middle, family, suffix] = parts.map(part);
    let name = generate_name(&prefix, &first, &middle, &family, &suffix);
    assert_eq!(name.as_deref(), expected);
}

#[test]
fn test_name_from_components() {
    // Component-valued parts contribute their first component
    let family = FieldValue::components(["Wood", "Vorname"]);
    let name = generate_name(
        &FieldValue::Null,
        &FieldValue::text("Patrick"),
        &FieldValue::Null,
        &family,
        &FieldValue::Null,
    );
    assert_eq!(name.as_deref(), Some("Patrick Wood"));
}
