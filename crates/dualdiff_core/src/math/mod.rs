//! Numerical routines built on [`DualNumber`](crate::types::DualNumber).
//!
//! - `derivative`: Evaluate a function and its derivative at a point, plus a
//!   central finite-difference reference for verification
//! - `solvers`: Newton-Raphson root finding with explicit or AD derivatives

pub mod derivative;
pub mod solvers;
