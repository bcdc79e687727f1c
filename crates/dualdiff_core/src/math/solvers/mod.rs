//! Root-finding solvers.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Quadratic convergence using derivatives, either
//!   supplied explicitly or propagated through
//!   [`DualNumber`](crate::types::DualNumber) arithmetic
//!
//! ## Configuration
//!
//! [`SolverConfig`] controls:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `derivative_floor`: Smallest accepted `|f'(x)|` (default: 1e-30)
//!
//! ## Logging
//!
//! Iterations are reported as `tracing` events: each step at `TRACE`,
//! convergence at `DEBUG`, failures at `WARN`.
//!
//! ## Examples
//!
//! ```
//! use dualdiff_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2) without writing f'
//! let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let root = solver.find_root_ad(|x| Ok(x * x - 2.0), 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

// Re-export public types at module level
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
