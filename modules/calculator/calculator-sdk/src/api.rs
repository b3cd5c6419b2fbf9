//! Calculator API trait and types
//!
//! Contract trait and error types for the calculator.

use serde_json::Value;

use crate::{Number, Operation};

/// Calculator API trait
///
/// Binary arithmetic over dynamically typed operands. Every operand is
/// validated to be an integer or floating-point number before any arithmetic
/// is attempted; `a` is always validated before `b`.
pub trait CalculatorApi: Send + Sync {
    /// Add two operands and return the sum.
    ///
    /// # Errors
    /// Returns `CalculatorError::TypeMismatch` if either operand is not a number,
    /// or `CalculatorError::Overflow` if integer addition overflows.
    fn add(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError>;

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// Returns `CalculatorError::TypeMismatch` if either operand is not a number,
    /// or `CalculatorError::Overflow` if integer subtraction overflows.
    fn subtract(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError>;

    /// Dispatch to `add` or `subtract`.
    ///
    /// # Errors
    /// Same as the selected operation.
    fn apply(&self, op: Operation, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
        }
    }
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// An operand is not an integer or floating-point number.
    #[error("'{label}' must be an int or float, got '{actual}'")]
    TypeMismatch { label: String, actual: String },

    /// Checked integer arithmetic overflowed `i64`.
    #[error("integer overflow: {a} {} {b}", .op.symbol())]
    Overflow { op: Operation, a: i64, b: i64 },
}

impl CalculatorError {
    /// Create a type mismatch error for the operand named `label`.
    #[must_use]
    pub fn type_mismatch(label: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            label: label.into(),
            actual: actual.into(),
        }
    }

    /// Create an integer overflow error.
    #[must_use]
    pub fn overflow(op: Operation, a: i64, b: i64) -> Self {
        Self::Overflow { op, a, b }
    }

    /// Stable machine-readable kind, used in JSON output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::Overflow { .. } => "overflow",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_message_names_label_and_type() {
        let err = CalculatorError::type_mismatch("a", "str");
        assert_eq!(err.to_string(), "'a' must be an int or float, got 'str'");
        assert_eq!(err.kind(), "type_mismatch");
    }

    #[test]
    fn overflow_message_shows_expression() {
        let err = CalculatorError::overflow(Operation::Subtract, i64::MIN, 1);
        assert_eq!(
            err.to_string(),
            format!("integer overflow: {} - 1", i64::MIN)
        );
        assert_eq!(err.kind(), "overflow");
    }
}
