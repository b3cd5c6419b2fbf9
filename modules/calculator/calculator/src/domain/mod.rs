//! Domain layer for calculator module
//!
//! Contains operand validation and the arithmetic entry points.

pub mod service;
pub mod validator;

pub use service::{Calculator, add, subtract};
pub use validator::{ensure_number, type_name};
