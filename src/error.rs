//! Error taxonomy shared by all calculators
//!
//! Every fallible routine in this crate returns one of four error kinds:
//! malformed input, mathematically undefined result, an impossible or
//! under-determined problem statement, or an input past a safety bound.
//! Errors are never folded into a default value; the WASM wrappers convert
//! them into rejected JsValues so the UI can show the message verbatim.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Error type for all calculator operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Input text could not be parsed as a number (or operation name)
    #[error("parse error: {0}")]
    Parse(String),

    /// The requested value is mathematically undefined for this input
    #[error("domain error: {0}")]
    Domain(String),

    /// The supplied values cannot describe a valid problem
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Input exceeds a practical magnitude bound
    #[error("resource limit: {0}")]
    ResourceLimit(String),
}

impl CalcError {
    /// Shorthand for a parse failure
    pub fn parse(msg: impl Into<String>) -> CalcError {
        CalcError::Parse(msg.into())
    }

    /// Shorthand for a domain error
    pub fn domain(msg: impl Into<String>) -> CalcError {
        CalcError::Domain(msg.into())
    }

    /// Shorthand for a constraint violation
    pub fn constraint(msg: impl Into<String>) -> CalcError {
        CalcError::Constraint(msg.into())
    }

    /// Shorthand for a resource-limit rejection
    pub fn limit(msg: impl Into<String>) -> CalcError {
        CalcError::ResourceLimit(msg.into())
    }
}

impl From<CalcError> for JsValue {
    fn from(err: CalcError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category() {
        let err = CalcError::domain("division by zero");
        assert_eq!(err.to_string(), "domain error: division by zero");

        let err = CalcError::parse("not a number: 'abc'");
        assert!(err.to_string().starts_with("parse error:"));
    }

    #[test]
    fn test_categories_are_distinct() {
        assert_ne!(
            CalcError::domain("factorial of -1"),
            CalcError::constraint("factorial of -1")
        );
    }
}
