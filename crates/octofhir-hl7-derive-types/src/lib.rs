//! Value types for HL7 v2 field derivation
//!
//! This crate defines the values that flow through the derivation rules:
//! - `FieldValue`: an already-extracted field, absent, blank, scalar or structured
//! - `DerivedValue`: the normalized result handed back to the resource pipeline
//! - Value coercion (`string_value`, `joined_string_value`)
//! - Closed code enumerations (encounter status, address use and type)
//! - Segment access for rules that inspect field cardinality

pub mod codes;
pub mod coercion;
pub mod segment;
pub mod value;

pub use codes::{AddressType, AddressUse, EncounterStatus, UnknownCode};
pub use coercion::{joined_string_value, string_value};
pub use segment::{Segment, SegmentAccess, StructuralError, StructuralResult};
pub use value::{DerivedValue, FieldValue};
