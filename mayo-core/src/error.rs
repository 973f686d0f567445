//! Structured errors for unit system clients
//!
//! A failed call yields a `MayoError` inside `Value::Error` rather than a
//! panic. The code is stable and machine-readable; the suggestion tells a
//! user how to rephrase the input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_SCHEMA: &str = "UNKNOWN_SCHEMA";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const UNDEFINED_FIELD: &str = "UNDEFINED_FIELD";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

/// Where an error came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Text the user typed, when the error is about parsing it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// One entry per hop the error travelled through
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MayoError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl MayoError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        MayoError {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        self.context.get_or_insert_with(ErrorContext::default)
    }

    /// Record the function that rejected the call
    pub fn in_function(mut self, function: impl Into<String>) -> Self {
        self.context_mut().function = Some(function.into());
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.context_mut().input = Some(input.into());
        self
    }

    /// Append a propagation note, keeping earlier ones
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context_mut().notes.push(note.into());
        self
    }

    // Quantity input

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, details)
            .with_suggestion("Write a number first, then the unit symbol without a space: \"25.4mm\"")
    }

    pub fn unknown_unit(symbol: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("'{}' is not a known unit symbol", symbol))
            .with_suggestion("unit_symbols(\"length\") lists the symbols of a dimension")
    }

    pub fn unknown_schema(name: &str) -> Self {
        Self::new(codes::UNKNOWN_SCHEMA, format!("'{}' is not a unit schema", name))
            .with_suggestion("Schemas are \"si\" and \"imperial_uk\"")
    }

    // Calls and values

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("No function named '{}'", name))
    }

    pub fn undefined_field(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FIELD, format!("No field '{}'", name))
    }

    pub fn type_error(expected: &str, got: &str) -> Self {
        Self::new(codes::TYPE_ERROR, format!("Expected {}, got {}", expected, got))
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT, format!("{}() takes at least {} arguments, got {}", func, expected, got))
            .with_suggestion(format!("help(\"{}\") shows the arguments", func))
            .in_function(func)
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE, format!("Argument '{}' must be {}, got {}", arg, expected, got))
            .in_function(func)
    }

    pub fn not_found(details: impl Into<String>) -> Self {
        Self::new(codes::NOT_FOUND, details)
    }
}

impl fmt::Display for MayoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(function) = self.context.as_ref().and_then(|c| c.function.as_deref()) {
            write!(f, " in {}()", function)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Hint: {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MayoError {}
