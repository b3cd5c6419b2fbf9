#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator SDK
//!
//! This crate provides the contract types of the calculator:
//! - API trait (`CalculatorApi`)
//! - Numeric value type (`Number`)
//! - Operation selector (`Operation`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorApi;
//! use serde_json::json;
//!
//! fn total(api: &dyn CalculatorApi) -> Result<calculator_sdk::Number, calculator_sdk::CalculatorError> {
//!     api.add(&json!(2), &json!(3.0))
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorApi, CalculatorError};

// === VALUE TYPES ===
mod number;
mod operation;
pub use number::Number;
pub use operation::{Operation, ParseOperationError};
