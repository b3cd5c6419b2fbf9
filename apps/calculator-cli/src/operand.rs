//! Command-line operand parsing.

use serde_json::Value;
use thiserror::Error;

/// Operand arguments that cannot be turned into a JSON value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperandError {
    /// A numeric literal whose magnitude does not fit in `f64`.
    #[error("numeric literal '{0}' is out of range")]
    OutOfRange(String),
}

/// Parse an operand argument as a JSON literal.
///
/// Anything that is not valid JSON is kept as a string so that the calculator
/// reports it as a type mismatch instead of clap rejecting it.
///
/// # Errors
/// Returns `OperandError::OutOfRange` for numeric literals such as `1e400`
/// that are valid JSON syntax but overflow `f64`.
pub fn parse_operand(raw: &str) -> Result<Value, OperandError> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(err) if err.to_string().starts_with("number out of range") => {
            Err(OperandError::OutOfRange(raw.to_owned()))
        }
        Err(_) => Ok(Value::String(raw.to_owned())),
    }
}
