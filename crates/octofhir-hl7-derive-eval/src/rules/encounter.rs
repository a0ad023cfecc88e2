//! Encounter status

use log::info;
use octofhir_hl7_derive_types::{EncounterStatus, FieldValue};

/// Derive the encounter status from three presence signals, checked in order:
/// the first present one decides (finished, arrived, cancelled). Without any
/// signal the status is unknown.
///
/// Presence means "not null"; the values themselves are not inspected.
pub fn encounter_status(finished: &FieldValue, arrived: &FieldValue, cancelled: &FieldValue) -> EncounterStatus {
    info!("Generating encounter status from signals {finished}, {arrived}, {cancelled}");
    if !finished.is_null() {
        EncounterStatus::Finished
    } else if !arrived.is_null() {
        EncounterStatus::Arrived
    } else if !cancelled.is_null() {
        EncounterStatus::Cancelled
    } else {
        EncounterStatus::Unknown
    }
}
