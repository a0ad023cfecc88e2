//! Elapsed time between two point-in-time values
//!
//! Values may be HL7 DTM (`YYYY[MM[DD[HH[MM[SS[.S[S[S[S]]]]]]]]][+/-ZZZZ]`) or
//! ISO 8601 (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.f]][Z|+HH:MM]`). Each side is
//! parsed independently and keeps its own precision.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use log::{debug, warn};
use octofhir_hl7_derive_types::{FieldValue, string_value};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::{DeriveOptions, parse_zone_offset};

static HL7_DTM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{4})(?:([0-9]{2})(?:([0-9]{2})(?:([0-9]{2})(?:([0-9]{2})(?:([0-9]{2})(?:\.([0-9]{1,4}))?)?)?)?)?)?([+-][0-9]{4})?$",
    )
    .expect("HL7 DTM pattern is valid")
});

/// A parsed point in time, at the precision it was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTemporal {
    /// YYYY
    Year(i32),
    /// YYYYMM
    YearMonth { year: i32, month: u32 },
    /// Calendar date without time of day
    Date(NaiveDate),
    /// Date and time without zone
    DateTime(NaiveDateTime),
    /// Date and time with a zone offset
    Zoned(DateTime<FixedOffset>),
}

impl ParsedTemporal {
    /// Whether the value is precise to (at least) the hour
    pub fn has_time(&self) -> bool {
        matches!(self, Self::DateTime(_) | Self::Zoned(_))
    }

    /// The value as a zoned date-time, placing unzoned values in `zone`
    fn in_zone(&self, zone: FixedOffset) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Zoned(dt) => Some(*dt),
            Self::DateTime(naive) => zone.from_local_datetime(naive).single(),
            _ => None,
        }
    }
}

/// Parse HL7 DTM or ISO 8601 text. Returns `None` when neither applies or the
/// calendar values are out of range.
pub fn parse_temporal(text: &str) -> Option<ParsedTemporal> {
    let text = text.trim();
    parse_hl7_dtm(text).or_else(|| parse_iso8601(text))
}

fn parse_hl7_dtm(text: &str) -> Option<ParsedTemporal> {
    let caps = HL7_DTM.captures(text)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let Some(month) = number(2) else {
        return Some(ParsedTemporal::Year(year));
    };
    let Some(day) = number(3) else {
        // Validates the month
        NaiveDate::from_ymd_opt(year, month, 1)?;
        return Some(ParsedTemporal::YearMonth { year, month });
    };
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let Some(hour) = number(4) else {
        return Some(ParsedTemporal::Date(date));
    };

    let nanos = caps.get(7).map_or(Some(0), |m| fraction_to_nanos(m.as_str()))?;
    let time = NaiveTime::from_hms_nano_opt(hour, number(5).unwrap_or(0), number(6).unwrap_or(0), nanos)?;
    let naive = date.and_time(time);

    match caps.get(8) {
        Some(zone) => {
            let offset = parse_zone_offset(zone.as_str())?;
            offset.from_local_datetime(&naive).single().map(ParsedTemporal::Zoned)
        }
        None => Some(ParsedTemporal::DateTime(naive)),
    }
}

/// ".5" is 500 ms, ".0125" is 12.5 ms
fn fraction_to_nanos(digits: &str) -> Option<u32> {
    let value = digits.parse::<u32>().ok()?;
    let scale = 10u32.checked_pow(9u32.checked_sub(digits.len() as u32)?)?;
    value.checked_mul(scale)
}

fn parse_iso8601(text: &str) -> Option<ParsedTemporal> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(ParsedTemporal::Zoned(dt));
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z") {
        return Some(ParsedTemporal::Zoned(dt));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ParsedTemporal::DateTime(naive));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(ParsedTemporal::Date)
}

/// Whole minutes from `start` to `end` (negative when `end` is earlier),
/// truncated toward zero.
///
/// Both values need time-of-day precision. A zoned and an unzoned value can only
/// be compared when the options provide a default zone.
pub fn minutes_between(start: &ParsedTemporal, end: &ParsedTemporal, options: &DeriveOptions) -> Option<i64> {
    match (start, end) {
        (ParsedTemporal::DateTime(a), ParsedTemporal::DateTime(b)) => {
            Some(b.signed_duration_since(*a).num_minutes())
        }
        (ParsedTemporal::Zoned(a), ParsedTemporal::Zoned(b)) => {
            Some(b.signed_duration_since(*a).num_minutes())
        }
        (a, b) if a.has_time() && b.has_time() => {
            let zone = options.default_zone()?;
            let a = a.in_zone(zone)?;
            let b = b.in_zone(zone)?;
            Some(b.signed_duration_since(a).num_minutes())
        }
        _ => None,
    }
}

/// Elapsed minutes between two field values, using default options.
pub fn diff_date_min(start: &FieldValue, end: &FieldValue) -> Option<i64> {
    diff_date_min_with(start, end, &DeriveOptions::default())
}

/// Elapsed minutes between two field values.
///
/// Returns `None` when either side is absent or unparseable, or when the two
/// values cannot be compared at minute precision.
pub fn diff_date_min_with(start: &FieldValue, end: &FieldValue, options: &DeriveOptions) -> Option<i64> {
    debug!("Generating time diff in min from start {start}, end {end}");
    let start_text = string_value(start)?;
    let end_text = string_value(end)?;

    let (Some(first), Some(second)) = (parse_temporal(&start_text), parse_temporal(&end_text)) else {
        warn!("Cannot evaluate time difference for start: {start_text}, end: {end_text}: unparseable value");
        return None;
    };

    let minutes = minutes_between(&first, &second, options);
    if minutes.is_none() {
        warn!(
            "Cannot evaluate time difference for start: {start_text}, end: {end_text}: incompatible precision ({first:?}, {second:?})"
        );
    }
    minutes
}
