//! Date/Time Difference Tests
//!
//! Tests for: diff_date_min, diff_date_min_with, parse_temporal

use octofhir_hl7_derive_eval::{DeriveOptions, ParsedTemporal, diff_date_min, diff_date_min_with, parse_temporal};
use octofhir_hl7_derive_types::FieldValue;
use rstest::rstest;

fn minutes(start: &str, end: &str) -> Option<i64> {
    diff_date_min(&FieldValue::text(start), &FieldValue::text(end))
}

// ============================================================================
// Same-precision values
// ============================================================================

#[rstest]
#[case("202401010000", "202401010130", Some(90))]
#[case("202401010130", "202401010000", Some(-90))]
#[case("20240101000000", "20240101000000", Some(0))]
#[case("2024010100", "2024010223", Some(47 * 60))]
#[case("20240228230000", "20240301010000", Some(26 * 60))]
#[case("20240101000000", "20240101000059", Some(0))]
#[case("20240101000059", "20240101000000", Some(0))]
#[case("20240101000000.5", "20240101000100", Some(0))]
fn test_unzoned_minutes(#[case] start: &str, #[case] end: &str, #[case] expected: Option<i64>) {
    assert_eq!(minutes(start, end), expected);
}

#[rstest]
#[case("20240101100000+0100", "20240101100000+0000", Some(60))]
#[case("20240101100000-0500", "20240101100000-0500", Some(0))]
#[case("2024-01-01T10:00:00Z", "2024-01-01T12:30:00+01:00", Some(90))]
#[case("2024-01-01T10:00:00+05:30", "20240101100000+0530", Some(0))]
fn test_zoned_minutes(#[case] start: &str, #[case] end: &str, #[case] expected: Option<i64>) {
    assert_eq!(minutes(start, end), expected);
}

#[test]
fn test_iso_and_hl7_mix() {
    assert_eq!(minutes("2024-01-01T00:00", "202401010045"), Some(45));
}

// ============================================================================
// Values that cannot be compared
// ============================================================================

#[rstest]
#[case("20240101", "20240102")]
#[case("2024", "2025")]
#[case("202401", "20240101000000")]
#[case("2024-01-01", "2024-01-01T10:00")]
#[case("yesterday", "20240101000000")]
#[case("20240101000000", "20241301000000")]
fn test_not_comparable(#[case] start: &str, #[case] end: &str) {
    assert_eq!(minutes(start, end), None);
}

#[test]
fn test_absent_values() {
    let ts = FieldValue::text("20240101000000");
    assert_eq!(diff_date_min(&FieldValue::Null, &ts), None);
    assert_eq!(diff_date_min(&ts, &FieldValue::Null), None);
    assert_eq!(diff_date_min(&FieldValue::text("  "), &ts), None);
}

// ============================================================================
// Zoned against unzoned
// ============================================================================

#[test]
fn test_mixed_zone_needs_default_zone() {
    let start = FieldValue::text("20240101100000+0100");
    let end = FieldValue::text("20240101100000");

    assert_eq!(diff_date_min(&start, &end), None);

    let utc = DeriveOptions::builder().default_zone_str("UTC").unwrap().build();
    assert_eq!(diff_date_min_with(&start, &end, &utc), Some(60));

    let plus_one = DeriveOptions::builder().default_zone_str("+01:00").unwrap().build();
    assert_eq!(diff_date_min_with(&start, &end, &plus_one), Some(0));
}

#[test]
fn test_default_zone_does_not_affect_unzoned_pairs() {
    let options = DeriveOptions::builder().default_zone_str("-08:00").unwrap().build();
    let start = FieldValue::text("202401010000");
    let end = FieldValue::text("202401010130");
    assert_eq!(diff_date_min_with(&start, &end, &options), Some(90));
}

#[test]
fn test_parse_keeps_precision() {
    assert!(matches!(parse_temporal("2024"), Some(ParsedTemporal::Year(2024))));
    assert!(matches!(parse_temporal("202401011200"), Some(ParsedTemporal::DateTime(_))));
    assert!(matches!(parse_temporal("202401011200+0200"), Some(ParsedTemporal::Zoned(_))));
    assert!(!parse_temporal("20240101").is_some_and(|t| t.has_time()));
}
