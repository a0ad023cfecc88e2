//! Derivation engine
//!
//! Bundles the options and the function registry so that a caller can evaluate
//! rules by name without threading both through every call.

use crate::error::DeriveResult;
use crate::options::DeriveOptions;
use crate::registry::FunctionRegistry;
use octofhir_hl7_derive_types::{DerivedValue, FieldValue};

/// The derivation engine
///
/// Immutable after construction; share it between threads behind an `Arc` or by
/// reference.
#[derive(Debug, Clone)]
pub struct DeriveEngine {
    /// Options passed to every rule
    options: DeriveOptions,
    /// Function registry
    registry: FunctionRegistry,
}

impl Default for DeriveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DeriveEngine {
    /// Create an engine with the standard rules and default options
    pub fn new() -> Self {
        Self::with_options(DeriveOptions::default())
    }

    /// Create an engine with the standard rules and the given options
    pub fn with_options(options: DeriveOptions) -> Self {
        Self {
            options,
            registry: FunctionRegistry::with_standard_functions(),
        }
    }

    /// Create an engine with a custom registry
    pub fn with_registry(registry: FunctionRegistry, options: DeriveOptions) -> Self {
        Self { options, registry }
    }

    /// The options in effect
    pub fn options(&self) -> &DeriveOptions {
        &self.options
    }

    /// The function registry
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Get a mutable reference to the registry
    pub fn registry_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.registry
    }

    /// Evaluate the named rule with positional arguments
    pub fn evaluate(&self, name: &str, args: &[FieldValue]) -> DeriveResult<DerivedValue> {
        self.registry.invoke(name, args, &self.options)
    }
}
