#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator Module
//!
//! Addition and subtraction over dynamically typed operands. Each operand is
//! checked to be an integer or a float before any arithmetic happens.
//!
//! ## Architecture
//!
//! - `domain/validator.rs` - Operand type checks
//! - `domain/service.rs` - Free functions and the namespaced `Calculator`
//!
//! Contract types (`Number`, `CalculatorError`, `CalculatorApi`) live in the
//! `calculator-sdk` crate and are re-exported here.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === INTERNAL MODULES ===
pub mod domain;

pub use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation};
pub use domain::{Calculator, add, ensure_number, subtract};
