//! Derivation rules
//!
//! Each submodule is an independent group of pure functions over
//! [`FieldValue`](octofhir_hl7_derive_types::FieldValue) inputs:
//!
//! - **range**: low/high bounds from free-text reference ranges
//! - **name**: person name assembly
//! - **address**: address use, type and district resolution
//! - **encounter**: encounter status from presence signals
//! - **telecom**: display formatting of telephone numbers
//! - **datetime**: elapsed minutes between two point-in-time values
//! - **string**: split-by-index, join-with-delimiter and string arrays

pub mod address;
pub mod datetime;
pub mod encounter;
pub mod name;
pub mod range;
pub mod string;
pub mod telecom;
