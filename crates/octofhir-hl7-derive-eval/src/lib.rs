//! HL7 v2 Field Derivation Rules
//!
//! This crate turns already-extracted HL7 v2 field values into the normalized
//! attributes a FHIR resource pipeline needs:
//!
//! - **Range bounds**: low/high limits from free-text reference ranges (OBX-7)
//! - **Names**: space-joined person names (XPN)
//! - **Addresses**: use, type and district (XAD, PID-11/PID-12)
//! - **Encounter status**: from discharge/arrival/cancellation signals
//! - **Telecom**: display form of telephone numbers (XTN)
//! - **Date/time**: elapsed minutes between two DTM values
//! - **Strings**: split-by-index, join-with-delimiter, string arrays
//!
//! Every rule is a pure function. Absent, blank or malformed input never causes
//! an error; it yields `None` (or the documented sentinel) and, at most, a log
//! record through the `log` facade.
//!
//! # Example
//!
//! ```
//! use octofhir_hl7_derive_eval::DeriveEngine;
//! use octofhir_hl7_derive_types::{DerivedValue, FieldValue};
//!
//! let engine = DeriveEngine::new();
//! let high = engine
//!     .evaluate("extract_high", &[FieldValue::text("649-1346 cells/mcL")])
//!     .unwrap();
//! assert_eq!(high, DerivedValue::Text("1346".to_string()));
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod registry;
pub mod rules;

// Re-export main types
pub use engine::DeriveEngine;
pub use error::{DeriveError, DeriveResult};
pub use options::{DeriveConfig, DeriveOptions, DeriveOptionsBuilder};
pub use registry::{DeriveFn, FunctionDefinition, FunctionParameter, FunctionRegistry};

// Re-export the rules
pub use rules::address::{address_district, address_type, address_type_code, address_use, address_use_code};
pub use rules::datetime::{ParsedTemporal, diff_date_min, diff_date_min_with, minutes_between, parse_temporal};
pub use rules::encounter::encounter_status;
pub use rules::name::generate_name;
pub use rules::range::{extract_high, extract_low};
pub use rules::string::{concatenate_with_char, make_string_array, split};
pub use rules::telecom::format_telecom_number;
