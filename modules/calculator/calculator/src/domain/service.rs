//! Domain service for calculator
//!
//! Contains the free arithmetic functions and the namespaced `Calculator`.

use serde_json::Value;
use tracing::debug;

use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation};

use super::validator::ensure_operands;

/// Validate `a` and `b` and return their sum.
///
/// Two integers give an integer; any float operand gives a float.
///
/// # Errors
/// Returns `CalculatorError::TypeMismatch` naming the first non-numeric
/// operand, or `CalculatorError::Overflow` on `i64` overflow.
pub fn add(a: &Value, b: &Value) -> Result<Number, CalculatorError> {
    let (a, b) = ensure_operands(a, b)?;
    debug!(%a, %b, "performing addition");
    a.checked_add(b)
}

/// Validate `a` and `b` and return `a - b`.
///
/// # Errors
/// Returns `CalculatorError::TypeMismatch` naming the first non-numeric
/// operand, or `CalculatorError::Overflow` on `i64` overflow.
pub fn subtract(a: &Value, b: &Value) -> Result<Number, CalculatorError> {
    let (a, b) = ensure_operands(a, b)?;
    debug!(%a, %b, "performing subtraction");
    a.checked_sub(b)
}

/// Stateless grouping of the arithmetic operations.
///
/// `Calculator::add` and `Calculator::subtract` behave exactly like the free
/// functions; use whichever reads better at the call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Same as [`add`].
    ///
    /// # Errors
    /// See [`add`].
    pub fn add(a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        add(a, b)
    }

    /// Same as [`subtract`].
    ///
    /// # Errors
    /// See [`subtract`].
    pub fn subtract(a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        subtract(a, b)
    }

    /// Run `op` over `a` and `b`.
    ///
    /// # Errors
    /// See [`add`] and [`subtract`].
    pub fn apply(op: Operation, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        match op {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
        }
    }
}

impl CalculatorApi for Calculator {
    fn add(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        add(a, b)
    }

    fn subtract(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        subtract(a, b)
    }
}
