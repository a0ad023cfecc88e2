//! Function registry for derivation rules
//!
//! An expression evaluator refers to rules by name and passes the already
//! extracted field values positionally. This module maps names to rule
//! implementations and checks argument counts.

use crate::error::{DeriveError, DeriveResult};
use crate::options::DeriveOptions;
use crate::rules::{address, datetime, encounter, name, range, string, telecom};
use octofhir_hl7_derive_types::{DerivedValue, FieldValue, string_value};
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for rule implementations
pub type DeriveFn = Arc<dyn Fn(&[FieldValue], &DeriveOptions) -> DerivedValue + Send + Sync>;

static NULL_FIELD: FieldValue = FieldValue::Null;

/// Function parameter definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParameter {
    /// Parameter name
    pub name: String,
    /// Whether optional (missing arguments are passed as null)
    pub optional: bool,
}

impl FunctionParameter {
    /// Create a required parameter
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }

    /// Create an optional parameter
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: true,
        }
    }
}

/// A named rule with its parameter list
#[derive(Clone)]
pub struct FunctionDefinition {
    /// Function name
    pub name: String,
    /// Parameters
    pub parameters: Vec<FunctionParameter>,
    /// Whether the last parameter accepts any number of arguments
    pub variadic: bool,
    /// Implementation
    pub implementation: DeriveFn,
}

impl FunctionDefinition {
    /// Create a new function definition
    pub fn new(name: impl Into<String>, parameters: Vec<FunctionParameter>, implementation: DeriveFn) -> Self {
        Self {
            name: name.into(),
            parameters,
            variadic: false,
            implementation,
        }
    }

    /// Accept any number of trailing arguments
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Smallest accepted argument count
    pub fn min_arity(&self) -> usize {
        self.parameters.iter().filter(|p| !p.optional).count()
    }

    /// Largest accepted argument count
    pub fn max_arity(&self) -> usize {
        if self.variadic { usize::MAX } else { self.parameters.len() }
    }

    /// Check if this function accepts `count` arguments
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_arity() && count <= self.max_arity()
    }
}

impl std::fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("variadic", &self.variadic)
            .finish_non_exhaustive()
    }
}

/// Registry for function definitions
#[derive(Debug, Default, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionDefinition>,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every derivation rule registered
    pub fn with_standard_functions() -> Self {
        let mut registry = Self::new();
        registry.register_standard_functions();
        registry
    }

    /// Register a function, replacing any previous one with the same name
    pub fn register(&mut self, definition: FunctionDefinition) {
        self.functions.insert(definition.name.clone(), definition);
    }

    /// Get a function definition by name
    pub fn get(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.get(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Invoke a function by name with positional arguments.
    ///
    /// Errors only for an unknown name or an unacceptable argument count; the
    /// rule itself always produces a value.
    pub fn invoke(&self, name: &str, args: &[FieldValue], options: &DeriveOptions) -> DeriveResult<DerivedValue> {
        let definition = self
            .get(name)
            .ok_or_else(|| DeriveError::undefined_function(name))?;
        if !definition.accepts(args.len()) {
            return Err(DeriveError::arity_mismatch(
                name,
                definition.min_arity(),
                definition.max_arity(),
                args.len(),
            ));
        }
        Ok((definition.implementation)(args, options))
    }

    /// Register all derivation rules
    pub fn register_standard_functions(&mut self) {
        use FunctionParameter as P;

        self.register(FunctionDefinition::new(
            "extract_low",
            vec![P::required("range")],
            Arc::new(|args, _| range::extract_low(arg(args, 0)).into()),
        ));

        self.register(FunctionDefinition::new(
            "extract_high",
            vec![P::required("range")],
            Arc::new(|args, _| range::extract_high(arg(args, 0)).into()),
        ));

        self.register(FunctionDefinition::new(
            "generate_name",
            vec![
                P::optional("prefix"),
                P::optional("first"),
                P::optional("middle"),
                P::optional("family"),
                P::optional("suffix"),
            ],
            Arc::new(|args, _| {
                name::generate_name(arg(args, 0), arg(args, 1), arg(args, 2), arg(args, 3), arg(args, 4)).into()
            }),
        ));

        self.register(FunctionDefinition::new(
            "address_use",
            vec![P::required("type"), P::optional("temporary"), P::optional("bad")],
            Arc::new(|args, _| address::address_use_code(arg(args, 0), arg(args, 1), arg(args, 2)).into()),
        ));

        self.register(FunctionDefinition::new(
            "address_type",
            vec![P::required("type"), P::optional("usage")],
            Arc::new(|args, _| address::address_type_code(arg(args, 0), arg(args, 1)).into()),
        ));

        self.register(FunctionDefinition::new(
            "address_district",
            vec![
                P::required("patient_county"),
                P::required("county_parish"),
                P::optional("patient"),
            ],
            Arc::new(|args, _| {
                let patient = Some(arg(args, 2)).filter(|p| !p.is_null());
                address::address_district(arg(args, 0), arg(args, 1), patient).into()
            }),
        ));

        self.register(FunctionDefinition::new(
            "encounter_status",
            vec![P::optional("finished"), P::optional("arrived"), P::optional("cancelled")],
            Arc::new(|args, _| {
                let status = encounter::encounter_status(arg(args, 0), arg(args, 1), arg(args, 2));
                DerivedValue::Text(status.code().to_string())
            }),
        ));

        self.register(FunctionDefinition::new(
            "format_telecom_number",
            vec![
                P::optional("old"),
                P::optional("country"),
                P::optional("area"),
                P::optional("local"),
                P::optional("extension"),
                P::optional("unformatted"),
            ],
            Arc::new(|args, _| {
                telecom::format_telecom_number(
                    arg(args, 0),
                    arg(args, 1),
                    arg(args, 2),
                    arg(args, 3),
                    arg(args, 4),
                    arg(args, 5),
                )
                .into()
            }),
        ));

        self.register(FunctionDefinition::new(
            "diff_date_min",
            vec![P::required("start"), P::required("end")],
            Arc::new(|args, options| datetime::diff_date_min_with(arg(args, 0), arg(args, 1), options).into()),
        ));

        self.register(FunctionDefinition::new(
            "split",
            vec![P::required("input"), P::required("delimiter"), P::required("index")],
            Arc::new(|args, _| {
                let (Some(delimiter), Some(index)) = (delimiter_arg(arg(args, 1)), index_arg(arg(args, 2))) else {
                    return DerivedValue::Null;
                };
                string::split(arg(args, 0), &delimiter, index).into()
            }),
        ));

        self.register(FunctionDefinition::new(
            "concatenate_with_char",
            vec![P::required("input"), P::required("delimiter")],
            Arc::new(|args, _| {
                let Some(delimiter) = delimiter_arg(arg(args, 1)) else {
                    return DerivedValue::Null;
                };
                string::concatenate_with_char(arg(args, 0), &delimiter).into()
            }),
        ));

        self.register(
            FunctionDefinition::new(
                "make_string_array",
                vec![P::optional("values")],
                Arc::new(|args, _| string::make_string_array(args).into()),
            )
            .variadic(),
        );
    }
}

/// Positional argument, null when not supplied
fn arg(args: &[FieldValue], index: usize) -> &FieldValue {
    args.get(index).unwrap_or(&NULL_FIELD)
}

/// Delimiters are taken verbatim so that whitespace and empty delimiters survive
fn delimiter_arg(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(s) => Some(s.clone()),
        other => string_value(other),
    }
}

fn index_arg(value: &FieldValue) -> Option<usize> {
    string_value(value)?.parse().ok()
}
