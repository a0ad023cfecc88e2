//! Errors raised at the registry and configuration boundary
//!
//! Derivation rules themselves never fail: bad input degrades to `None` or a
//! sentinel. These errors describe mistakes by the *caller* (unknown function
//! name, wrong argument count, invalid configuration).

use thiserror::Error;

/// Result type for registry, engine and configuration operations
pub type DeriveResult<T> = Result<T, DeriveError>;

/// Errors that can occur when invoking rules by name or building options
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// No rule registered under the name
    #[error("Undefined function: {name}")]
    UndefinedFunction { name: String },

    /// Argument count outside the accepted range
    #[error("Function {name} expects {min} to {max} arguments, found {found}")]
    ArityMismatch {
        name: String,
        min: usize,
        max: usize,
        found: usize,
    },

    /// Configuration value could not be interpreted
    #[error("Invalid configuration value for {key}: '{value}'")]
    InvalidConfig { key: String, value: String },
}

impl DeriveError {
    /// Create an undefined function error
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::UndefinedFunction { name: name.into() }
    }

    /// Create an arity mismatch error
    pub fn arity_mismatch(name: impl Into<String>, min: usize, max: usize, found: usize) -> Self {
        Self::ArityMismatch {
            name: name.into(),
            min,
            max,
            found,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }
}
