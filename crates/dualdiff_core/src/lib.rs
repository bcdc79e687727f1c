//! # dualdiff_core: Forward-Mode Automatic Differentiation on Scalars
//!
//! dualdiff_core provides a dual-number value type that carries a real value
//! together with its derivative with respect to one independent variable.
//! Arithmetic operators and elementary functions compute both parts in a
//! single pass, so composed expressions propagate derivatives by the chain
//! rule without any tape or graph.
//!
//! - Dual number type and its operators (`types::dual`)
//! - Lifting of plain numbers into dual numbers (`traits`)
//! - Derivative helpers and finite-difference reference (`math::derivative`)
//! - Newton-Raphson root finding driven by dual numbers (`math::solvers`)
//! - Error types: `DualError`, `SolverError` (`types::error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use dualdiff_core::types::{DualError, DualNumber};
//!
//! # fn main() -> Result<(), DualError> {
//! // f(x) = exp(x²) / (x + 1) at x = 1
//! let x = DualNumber::variable(1.0);
//! let f = ((x * x).exp() / (x + 1.0))?;
//!
//! let e = std::f64::consts::E;
//! assert!((f.value() - e / 2.0).abs() < 1e-12);
//! // f'(x) = e^(x²) (2x(x+1) - 1) / (x+1)²  =  3e/4 at x = 1
//! assert!((f.derivative() - 0.75 * e).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Semantics
//!
//! Division by a dual number whose value is exactly zero and non-integer
//! powers of negative bases return [`types::DualError`] instead of producing
//! silent infinities or NaNs. Every other operation is total.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
