//! Address resolvers
//!
//! XAD-7 (address type), XAD-16 (temporary indicator), XAD-17 (bad address
//! indicator) and XAD-18 (address usage) together decide the FHIR address `use`
//! and `type`. Rules are evaluated in order and the first match wins; codes are
//! compared case-insensitively.

use log::{debug, info};
use octofhir_hl7_derive_types::{AddressType, AddressUse, FieldValue, SegmentAccess, string_value};

/// PID-11, the repeating patient address field
pub const PID_ADDRESS_FIELD: usize = 11;

fn is(code: Option<&str>, expected: &str) -> bool {
    code.is_some_and(|c| c.eq_ignore_ascii_case(expected))
}

/// Resolve the address use.
///
/// | rule | result |
/// |------|--------|
/// | XAD-16 = Y, or XAD-16 blank and XAD-7 = C | temp |
/// | XAD-17 = Y, or XAD-17 blank and XAD-7 = BA | old |
/// | XAD-7 = H | home |
/// | XAD-7 = B or O | work |
/// | XAD-7 = BI | billing |
pub fn address_use(
    xad7_type: &FieldValue,
    xad16_temp: &FieldValue,
    xad17_bad: &FieldValue,
) -> Option<AddressUse> {
    info!("Calculating address use from XAD.7 {xad7_type}, XAD.16 {xad16_temp}, XAD.17 {xad17_bad}");
    let kind = string_value(xad7_type);
    let temp = string_value(xad16_temp);
    let bad = string_value(xad17_bad);
    let kind = kind.as_deref();

    if is(temp.as_deref(), "Y") || (temp.is_none() && is(kind, "C")) {
        Some(AddressUse::Temp)
    } else if is(bad.as_deref(), "Y") || (bad.is_none() && is(kind, "BA")) {
        Some(AddressUse::Old)
    } else if is(kind, "H") {
        Some(AddressUse::Home)
    } else if is(kind, "B") || is(kind, "O") {
        Some(AddressUse::Work)
    } else if is(kind, "BI") {
        Some(AddressUse::Billing)
    } else {
        None
    }
}

/// [`address_use`] as a code, with `""` when no rule matches
pub fn address_use_code(xad7_type: &FieldValue, xad16_temp: &FieldValue, xad17_bad: &FieldValue) -> String {
    address_use(xad7_type, xad16_temp, xad17_bad)
        .map(|u| u.code().to_string())
        .unwrap_or_default()
}

/// Resolve the address type.
///
/// | rule | result |
/// |------|--------|
/// | XAD-18 = M, or XAD-18 blank and XAD-7 = M | postal |
/// | XAD-18 = V, or XAD-18 blank and XAD-7 = SH | physical |
pub fn address_type(xad7_type: &FieldValue, xad18_type: &FieldValue) -> Option<AddressType> {
    info!("Calculating address type from XAD.7 {xad7_type}, XAD.18 {xad18_type}");
    let kind = string_value(xad7_type);
    let usage = string_value(xad18_type);
    let kind = kind.as_deref();

    if is(usage.as_deref(), "M") || (usage.is_none() && is(kind, "M")) {
        Some(AddressType::Postal)
    } else if is(usage.as_deref(), "V") || (usage.is_none() && is(kind, "SH")) {
        Some(AddressType::Physical)
    } else {
        None
    }
}

/// [`address_type`] as a code, with `""` when no rule matches
pub fn address_type_code(xad7_type: &FieldValue, xad18_type: &FieldValue) -> String {
    address_type(xad7_type, xad18_type)
        .map(|t| t.code().to_string())
        .unwrap_or_default()
}

/// Resolve the address district.
///
/// The county/parish of the address (XAD-9) wins when it is valued. When it is
/// absent, the patient county (PID-12) applies, but only if the patient has
/// exactly one address (PID-11 repeats once). If the segment cannot be
/// inspected the county/parish value stands.
///
/// A county/parish that is present but blank counts as valued: no fallback.
pub fn address_district<S>(
    patient_county: &FieldValue,
    county_parish: &FieldValue,
    patient: Option<&S>,
) -> Option<String>
where
    S: SegmentAccess + ?Sized,
{
    if !county_parish.is_null() {
        if county_parish.is_blank() {
            debug!("County/parish present but blank, not using patient county");
        }
        return string_value(county_parish);
    }

    let Some(patient) = patient else {
        debug!("No patient segment available, keeping empty district");
        return None;
    };

    match patient.repetition_count(PID_ADDRESS_FIELD) {
        Ok(1) => string_value(patient_county),
        Ok(count) => {
            debug!("Patient has {count} addresses, not using patient county");
            None
        }
        Err(e) => {
            debug!("Cannot inspect patient addresses, keeping empty district: {e}");
            None
        }
    }
}
