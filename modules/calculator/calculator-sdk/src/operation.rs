//! Binary operation selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalculatorError, Number};

/// One of the two supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    /// Infix symbol, used when rendering expressions.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// Apply the operation to two validated numbers.
    ///
    /// # Errors
    /// Returns `CalculatorError::Overflow` on `i64` overflow.
    pub fn apply(self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => a.checked_sub(b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation '{0}', expected 'add' or 'subtract'")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "sub" | "-" => Ok(Self::Subtract),
            _ => Err(ParseOperationError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_names_and_symbols() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" Subtract ".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("sub".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("+".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "multiply".parse::<Operation>().unwrap_err();
        assert_eq!(err, ParseOperationError("multiply".to_owned()));
        assert!(err.to_string().contains("multiply"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Operation::Subtract).unwrap(),
            "\"subtract\""
        );
        let op: Operation = serde_json::from_str("\"add\"").unwrap();
        assert_eq!(op, Operation::Add);
    }

    #[test]
    fn apply_dispatches() {
        let a = Number::Int(5);
        let b = Number::Int(3);
        assert!(matches!(Operation::Add.apply(a, b), Ok(Number::Int(8))));
        assert!(matches!(Operation::Subtract.apply(a, b), Ok(Number::Int(2))));
    }
}
