//! Core value and error types.
//!
//! This module provides:
//! - `dual`: The [`DualNumber`] forward-mode value type and its operators
//! - `error`: Structured error types for dual arithmetic and root finding
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DualNumber`] from `dual`
//! - [`DualError`], [`SolverError`] from `error`

pub mod dual;
pub mod error;

// Re-export commonly used types at module level
pub use dual::DualNumber;
pub use error::{DualError, SolverError};
