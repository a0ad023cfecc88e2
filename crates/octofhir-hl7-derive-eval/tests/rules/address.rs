//! Address Tests
//!
//! Tests for: address_use, address_type, address_district

use octofhir_hl7_derive_eval::{address_district, address_type, address_type_code, address_use, address_use_code};
use octofhir_hl7_derive_types::{
    AddressType, AddressUse, FieldValue, Segment, SegmentAccess, StructuralError, StructuralResult,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn value(s: Option<&str>) -> FieldValue {
    s.map(FieldValue::text).unwrap_or(FieldValue::Null)
}

// ============================================================================
// Address use
// ============================================================================

#[rstest]
#[case(Some("C"), None, None, Some(AddressUse::Temp))]
#[case(Some("H"), Some("Y"), None, Some(AddressUse::Temp))]
#[case(None, Some("y"), None, Some(AddressUse::Temp))]
#[case(Some("C"), Some("N"), None, None)]
#[case(Some("BA"), None, None, Some(AddressUse::Old))]
#[case(Some("H"), None, Some("Y"), Some(AddressUse::Old))]
#[case(Some("BA"), None, Some("N"), None)]
#[case(Some("H"), None, None, Some(AddressUse::Home))]
#[case(Some("h"), Some("N"), Some("N"), Some(AddressUse::Home))]
#[case(Some("B"), None, None, Some(AddressUse::Work))]
#[case(Some("O"), None, None, Some(AddressUse::Work))]
#[case(Some("BI"), None, None, Some(AddressUse::Billing))]
#[case(Some("M"), None, None, None)]
#[case(None, None, None, None)]
#[case(Some("  "), Some(""), None, None)]
fn test_address_use(
    #[case] xad7: Option<&str>,
    #[case] xad16: Option<&str>,
    #[case] xad17: Option<&str>,
    #[case] expected: Option<AddressUse>,
) {
    assert_eq!(address_use(&value(xad7), &value(xad16), &value(xad17)), expected);
}

#[test]
fn test_temp_precedes_old() {
    let result = address_use(&FieldValue::text("BA"), &FieldValue::text("Y"), &FieldValue::text("Y"));
    assert_eq!(result, Some(AddressUse::Temp));
}

#[test]
fn test_address_use_code() {
    assert_eq!(address_use_code(&FieldValue::text("H"), &FieldValue::Null, &FieldValue::Null), "home");
    assert_eq!(address_use_code(&FieldValue::text("BI"), &FieldValue::Null, &FieldValue::Null), "billing");
    assert_eq!(address_use_code(&FieldValue::text("X"), &FieldValue::Null, &FieldValue::Null), "");
}

// ============================================================================
// Address type
// ============================================================================

#[rstest]
#[case(Some("M"), None, Some(AddressType::Postal))]
#[case(Some("H"), Some("M"), Some(AddressType::Postal))]
#[case(Some("SH"), Some("m"), Some(AddressType::Postal))]
#[case(Some("SH"), None, Some(AddressType::Physical))]
#[case(Some("M"), Some("V"), Some(AddressType::Physical))]
#[case(None, Some("v"), Some(AddressType::Physical))]
#[case(Some("M"), Some("X"), None)]
#[case(Some("H"), None, None)]
#[case(None, None, None)]
fn test_address_type(
    #[case] xad7: Option<&str>,
    #[case] xad18: Option<&str>,
    #[case] expected: Option<AddressType>,
) {
    assert_eq!(address_type(&value(xad7), &value(xad18)), expected);
}

#[test]
fn test_address_type_code() {
    assert_eq!(address_type_code(&FieldValue::text("M"), &FieldValue::Null), "postal");
    assert_eq!(address_type_code(&FieldValue::text("SH"), &FieldValue::Null), "physical");
    assert_eq!(address_type_code(&FieldValue::Null, &FieldValue::Null), "");
}

// ============================================================================
// Address district
// ============================================================================

fn pid_with_addresses(count: usize) -> Segment {
    let addresses: Vec<String> = (0..count).map(|i| format!("{i} Main St")).collect();
    Segment::new("PID").field(3, "MRN-1").field(11, FieldValue::repeated(addresses))
}

/// Segment whose structure cannot be read
struct Unreadable;

impl SegmentAccess for Unreadable {
    fn repetition_count(&self, _field: usize) -> StructuralResult<usize> {
        Err(StructuralError::NotASegment {
            found: "Unreadable".to_string(),
        })
    }
}

#[test]
fn test_district_county_parish_wins() {
    let pid = pid_with_addresses(2);
    let district = address_district(&FieldValue::text("King"), &FieldValue::text("Seattle"), Some(&pid));
    assert_eq!(district.as_deref(), Some("Seattle"));
}

#[test]
fn test_district_county_parish_without_segment() {
    let district = address_district::<Segment>(&FieldValue::text("King"), &FieldValue::text("Seattle"), None);
    assert_eq!(district.as_deref(), Some("Seattle"));
}

#[rstest]
#[case(0, None)]
#[case(1, Some("King"))]
#[case(2, None)]
#[case(3, None)]
fn test_district_falls_back_for_single_address(#[case] addresses: usize, #[case] expected: Option<&str>) {
    let pid = pid_with_addresses(addresses);
    let district = address_district(&FieldValue::text("King"), &FieldValue::Null, Some(&pid));
    assert_eq!(district.as_deref(), expected);
}

#[test]
fn test_district_single_unrepeated_address() {
    let pid = Segment::new("PID").field(11, "1 Main St");
    let district = address_district(&FieldValue::text("King"), &FieldValue::Null, Some(&pid));
    assert_eq!(district.as_deref(), Some("King"));
}

#[test]
fn test_district_patient_as_field_value() {
    let pid = FieldValue::from(pid_with_addresses(1));
    let district = address_district(&FieldValue::text("King"), &FieldValue::Null, Some(&pid));
    assert_eq!(district.as_deref(), Some("King"));
}

#[test]
fn test_district_structural_error_keeps_empty_value() {
    let district = address_district(&FieldValue::text("King"), &FieldValue::Null, Some(&Unreadable));
    assert_eq!(district, None);
}

#[test]
fn test_district_blank_county_parish_does_not_fall_back() {
    let pid = pid_with_addresses(1);
    let district = address_district(&FieldValue::text("King"), &FieldValue::text(" "), Some(&pid));
    assert_eq!(district, None);
}

#[test]
fn test_district_no_patient_county() {
    let pid = pid_with_addresses(1);
    assert_eq!(address_district(&FieldValue::Null, &FieldValue::Null, Some(&pid)), None);
}
