//! Operand validation.
//!
//! Narrows an arbitrary JSON value to a `Number` or reports which operand had
//! the wrong type.

use serde_json::Value;

use calculator_sdk::{CalculatorError, Number};

/// Runtime type name of a dynamic value, as used in error messages.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate that `value` is an integer or float and return it as a `Number`.
///
/// `label` names the operand in the error message. Integers outside the `i64`
/// range become floats, whether the JSON parser kept them as `u64` or had
/// already widened them to `f64`.
///
/// # Errors
/// Returns `CalculatorError::TypeMismatch` if `value` is not a JSON number.
pub fn ensure_number(value: &Value, label: &str) -> Result<Number, CalculatorError> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Ok(Number::Int(i));
        }
        if let Some(f) = n.as_f64() {
            return Ok(Number::Float(f));
        }
    }
    Err(CalculatorError::type_mismatch(label, type_name(value)))
}

/// Validate both operands, `a` first.
pub(crate) fn ensure_operands(a: &Value, b: &Value) -> Result<(Number, Number), CalculatorError> {
    let a = ensure_number(a, "a")?;
    let b = ensure_number(b, "b")?;
    Ok((a, b))
}
