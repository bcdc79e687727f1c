//! Error types for structured error handling.
//!
//! This module provides:
//! - `DualError`: Failures of dual-number arithmetic and elementary functions
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Dual arithmetic errors.
///
/// Raised synchronously by the partial operations on
/// [`DualNumber`](crate::types::DualNumber). The operation produces no partial
/// result; the caller decides whether to substitute a fallback or abort.
///
/// # Variants
/// - `DivisionByZero`: Divisor value component is exactly zero
/// - `DomainError`: Non-integer power of a negative base
/// - `OutOfDomain`: Elementary function evaluated outside its real domain
///
/// # Examples
/// ```
/// use dualdiff_core::types::DualError;
///
/// let err = DualError::DivisionByZero { numerator: 1.0 };
/// assert_eq!(format!("{}", err), "Division by zero: 1 / 0");
///
/// let err = DualError::DomainError { base: -8.0, exponent: 0.5 };
/// assert!(format!("{}", err).contains("-8^0.5"));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DualError {
    /// Division where the divisor's value component is exactly zero.
    #[error("Division by zero: {numerator} / 0")]
    DivisionByZero {
        /// Value component of the dividend
        numerator: f64,
    },

    /// Non-integer power of a negative base has no real value.
    #[error("Domain error: {base}^{exponent} is not a real number")]
    DomainError {
        /// Value component of the base
        base: f64,
        /// Constant exponent
        exponent: f64,
    },

    /// Elementary function evaluated outside its real domain.
    #[error("Domain error: {function}({value}) is undefined")]
    OutOfDomain {
        /// Name of the function (e.g. `"ln"`)
        function: &'static str,
        /// Offending value component
        value: f64,
    },
}

impl DualError {
    /// Returns `true` for [`DualError::DivisionByZero`].
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, DualError::DivisionByZero { .. })
    }

    /// Returns `true` for either domain variant.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            DualError::DomainError { .. } | DualError::OutOfDomain { .. }
        )
    }
}

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding solver operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative too small for Newton-Raphson
/// - `NumericalInstability`: General numerical instability
/// - `InvalidConfig`: Rejected solver configuration
/// - `Evaluation`: The target function failed with a [`DualError`]
///
/// # Examples
/// ```
/// use dualdiff_core::types::{DualError, SolverError};
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
///
/// let err: SolverError = DualError::DivisionByZero { numerator: 2.0 }.into();
/// assert!(matches!(err, SolverError::Evaluation(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Solver configuration failed validation.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// Evaluating the target function failed.
    #[error("Function evaluation failed: {0}")]
    Evaluation(#[from] DualError),
}
