//! Numeric value type accepted by the calculator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CalculatorError, Operation};

/// A validated numeric operand or result: either an integer or a float.
///
/// Equality compares numeric value across variants, so `Int(5) == Float(5.0)`.
/// An `Int` only equals a `Float` that holds exactly the same integer.
/// Match on the variant when the result type matters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Runtime type name as reported in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// `self + rhs` with float promotion.
    ///
    /// # Errors
    /// Returns `CalculatorError::Overflow` if both sides are integers and the
    /// sum does not fit in `i64`.
    pub fn checked_add(self, rhs: Self) -> Result<Self, CalculatorError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map(Self::Int)
                .ok_or_else(|| CalculatorError::overflow(Operation::Add, a, b)),
            (a, b) => Ok(Self::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// `self - rhs` with float promotion.
    ///
    /// # Errors
    /// Returns `CalculatorError::Overflow` if both sides are integers and the
    /// difference does not fit in `i64`.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, CalculatorError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map(Self::Int)
                .ok_or_else(|| CalculatorError::overflow(Operation::Subtract, a, b)),
            (a, b) => Ok(Self::Float(a.as_f64() - b.as_f64())),
        }
    }
}

/// True when `f` holds exactly the integer `i`. Widening `i` alone is not
/// enough: above 2^53 neighbouring integers round to the same float.
#[allow(
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]
fn int_equals_float(i: i64, f: f64) -> bool {
    i as f64 == f && f as i128 == i128::from(i)
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => {
                int_equals_float(i, f)
            }
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::Int(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Float(*other)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

// Non-finite floats have no JSON representation and become `null`.
impl From<Number> for serde_json::Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Self::from(i),
            Number::Float(f) => Self::from(f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            // Debug keeps the trailing ".0" on whole floats
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn int_plus_int_stays_int() {
        let sum = Number::Int(2).checked_add(Number::Int(3)).unwrap();
        assert!(matches!(sum, Number::Int(5)));
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        let sum = Number::Int(2).checked_add(Number::Float(3.0)).unwrap();
        assert!(matches!(sum, Number::Float(x) if (x - 5.0).abs() < f64::EPSILON));

        let diff = Number::Float(5.5).checked_sub(Number::Int(3)).unwrap();
        assert!(diff.is_float());
        assert_eq!(diff, 2.5);
    }

    #[test]
    fn integer_overflow_is_reported() {
        let err = Number::Int(i64::MAX).checked_add(Number::Int(1)).unwrap_err();
        assert_eq!(err, CalculatorError::overflow(Operation::Add, i64::MAX, 1));

        let err = Number::Int(i64::MIN).checked_sub(Number::Int(1)).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::overflow(Operation::Subtract, i64::MIN, 1)
        );
    }

    #[test]
    fn float_overflow_saturates_to_infinity() {
        let sum = Number::Float(f64::MAX)
            .checked_add(Number::Float(f64::MAX))
            .unwrap();
        assert!(sum.as_f64().is_infinite());
    }

    #[test]
    fn equality_crosses_variants() {
        assert_eq!(Number::Int(5), Number::Float(5.0));
        assert_ne!(Number::Int(5), Number::Float(5.5));
        assert_eq!(Number::Int(7), 7);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn cross_variant_equality_is_exact_beyond_f64_precision() {
        let p = 1_i64 << 53;
        assert_eq!(Number::Int(p), Number::Float(p as f64));
        assert_ne!(Number::Int(p + 1), Number::Float(p as f64));
        assert_ne!(Number::Float(p as f64), Number::Int(p + 1));
        assert_ne!(Number::Int(i64::MAX), Number::Float(9_223_372_036_854_775_808.0));
        assert_eq!(Number::Int(i64::MIN), Number::Float(-9_223_372_036_854_775_808.0));
        assert_ne!(Number::Int(0), Number::Float(f64::NAN));
    }

    #[test]
    fn display_keeps_float_marker() {
        assert_eq!(Number::Int(5).to_string(), "5");
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn serializes_as_bare_json_number() {
        assert_eq!(serde_json::to_string(&Number::Int(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&Number::Float(2.5)).unwrap(), "2.5");
        assert_eq!(serde_json::Value::from(Number::Float(f64::NAN)), serde_json::Value::Null);
    }

    #[test]
    fn type_names() {
        assert_eq!(Number::Int(0).type_name(), "int");
        assert_eq!(Number::Float(0.0).type_name(), "float");
    }
}
