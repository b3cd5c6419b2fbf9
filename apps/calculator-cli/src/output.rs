//! Result rendering for text and JSON output modes.

use calculator::{CalculatorError, Number, Operation};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct Outcome<'a> {
    operation: Operation,
    a: &'a Value,
    b: &'a Value,
    result: Number,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

/// Render a successful calculation.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_result(
    json: bool,
    operation: Operation,
    a: &Value,
    b: &Value,
    result: Number,
) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(&Outcome {
            operation,
            a,
            b,
            result,
        })
    } else {
        Ok(result.to_string())
    }
}

/// Render a calculator error as a JSON envelope.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_error_json(err: &CalculatorError) -> serde_json::Result<String> {
    let label = match err {
        CalculatorError::TypeMismatch { label, .. } => Some(label.as_str()),
        CalculatorError::Overflow { .. } => None,
    };
    serde_json::to_string(&ErrorEnvelope {
        error: ErrorBody {
            kind: err.kind(),
            message: err.to_string(),
            label,
        },
    })
}
