//! HL7 v2 field derivation for Rust
//!
//! This crate bundles the rules a message-to-FHIR conversion pipeline calls
//! while building resources from HL7 v2 messages:
//! - Reference range bounds (OBX-7)
//! - Person names (XPN)
//! - Address use, type and district (XAD, PID-11, PID-12)
//! - Encounter status (PV1)
//! - Telephone number display (XTN)
//! - Elapsed minutes between two timestamps
//! - Split, join and string-array helpers
//!
//! # Example
//!
//! ```
//! use octofhir_hl7_derive::{DeriveEngine, DerivedValue, FieldValue};
//!
//! let engine = DeriveEngine::new();
//! let status = engine
//!     .evaluate("encounter_status", &[FieldValue::Null, FieldValue::text("20180621080000")])
//!     .unwrap();
//! assert_eq!(status, DerivedValue::Text("arrived".to_string()));
//! ```

// Re-export all public APIs from internal crates
pub use octofhir_hl7_derive_eval as eval;
pub use octofhir_hl7_derive_types as types;

// Convenience re-exports
pub use octofhir_hl7_derive_eval::{
    DeriveConfig, DeriveEngine, DeriveError, DeriveOptions, DeriveResult, FunctionRegistry,
};
pub use octofhir_hl7_derive_types::{DerivedValue, FieldValue, Segment, SegmentAccess};
