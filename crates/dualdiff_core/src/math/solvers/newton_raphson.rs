//! Newton-Raphson root-finding solver.

use num_traits::Float;
use tracing::{debug, trace, warn};

use super::SolverConfig;
use crate::types::{DualError, DualNumber, SolverError};

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)`. The derivative
/// is either supplied explicitly ([`find_root`](Self::find_root)) or
/// propagated through [`DualNumber`] arithmetic
/// ([`find_root_ad`](NewtonRaphsonSolver::find_root_ad)).
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Convergence is quadratic near a simple root. The solver fails if:
/// - The derivative falls below `config.derivative_floor`
/// - An iterate becomes non-finite
/// - `config.max_iterations` is reached
///
/// # Example
///
/// ```
/// use dualdiff_core::math::solvers::NewtonRaphsonSolver;
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();
///
/// let root = solver.find_root_ad(|x| Ok(x * x - 2.0), 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    ///
    /// # Example
    ///
    /// ```
    /// use dualdiff_core::math::solvers::NewtonRaphsonSolver;
    ///
    /// let solver = NewtonRaphsonSolver::with_defaults();
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!(f(root).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(x0, |x| Ok((f(x), f_prime(x))))
    }

    fn iterate<E>(&self, x0: T, mut eval: E) -> Result<T, SolverError>
    where
        E: FnMut(T) -> Result<(T, T), SolverError>,
    {
        let to_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let (f_val, f_prime_val) = eval(x)?;
            trace!(
                iteration,
                x = to_f64(x),
                f = to_f64(f_val),
                f_prime = to_f64(f_prime_val),
                "newton step"
            );

            if f_val.abs() < self.config.tolerance {
                debug!(iterations = iteration, root = to_f64(x), "newton converged");
                return Ok(x);
            }

            if f_prime_val.abs() < self.config.derivative_floor {
                warn!(x = to_f64(x), "newton derivative near zero");
                return Err(SolverError::DerivativeNearZero { x: to_f64(x) });
            }

            #[allow(clippy::assign_op_pattern)]
            {
                x = x - f_val / f_prime_val;
            }

            if !x.is_finite() {
                warn!(iteration, "newton iterate became non-finite");
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        warn!(
            iterations = self.config.max_iterations,
            last = to_f64(x),
            "newton failed to converge"
        );
        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

impl NewtonRaphsonSolver<f64> {
    /// Find a root, computing `f'` by forward-mode differentiation.
    ///
    /// Each iteration evaluates `f` once at `DualNumber::variable(x)` and
    /// reads the value and derivative from the result.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of, written over [`DualNumber`]
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::Evaluation)` - `f` raised a [`DualError`]
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    ///
    /// # Example
    ///
    /// ```
    /// use dualdiff_core::math::solvers::NewtonRaphsonSolver;
    ///
    /// let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();
    ///
    /// // Solve e^x - 2 = 0 (find ln 2)
    /// let root = solver.find_root_ad(|x| Ok(x.exp() - 2.0), 0.5).unwrap();
    /// assert!((root - 2.0_f64.ln()).abs() < 1e-10);
    /// ```
    pub fn find_root_ad<F>(&self, f: F, x0: f64) -> Result<f64, SolverError>
    where
        F: Fn(DualNumber) -> Result<DualNumber, DualError>,
    {
        self.iterate(x0, |x| Ok(f(DualNumber::variable(x))?.into_parts()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Explicit Derivative Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;

        let root = solver.find_root(f, f_prime, 1.0).unwrap();
        assert!(
            (root - std::f64::consts::SQRT_2).abs() < 1e-10,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            root
        );
    }

    #[test]
    fn test_find_sin_root() {
        let solver = NewtonRaphsonSolver::with_defaults();

        // sin(x) = 0 near x = 3 is π
        let root = solver.find_root(|x: f64| x.sin(), |x: f64| x.cos(), 3.0).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-10);
    }

    #[test]
    fn test_with_f32() {
        let config = SolverConfig::new(1e-5_f32, 100).unwrap();
        let solver = NewtonRaphsonSolver::new(config);

        let root = solver
            .find_root(|x: f32| x * x - 2.0, |x: f32| 2.0 * x, 1.0_f32)
            .unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_derivative_near_zero() {
        let solver = NewtonRaphsonSolver::with_defaults();

        let result = solver.find_root(|x: f64| x * x * x + 1.0, |_x: f64| 0.0, 0.5);
        match result.unwrap_err() {
            SolverError::DerivativeNearZero { x } => assert_eq!(x, 0.5),
            other => panic!("Expected DerivativeNearZero error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let config = SolverConfig::new(1e-300, 3).unwrap();
        let solver = NewtonRaphsonSolver::new(config);

        let result = solver.find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0);
        assert_eq!(
            result.unwrap_err(),
            SolverError::MaxIterationsExceeded { iterations: 3 }
        );
    }

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(1e-8, 50).unwrap();
        let solver = NewtonRaphsonSolver::new(config);

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    // ========================================
    // AD Mode Tests
    // ========================================

    mod ad_tests {
        use super::*;

        #[test]
        fn test_find_root_ad_sqrt_2() {
            let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

            let root = solver.find_root_ad(|x| Ok(x * x - 2.0), 1.0).unwrap();
            assert!(
                (root - std::f64::consts::SQRT_2).abs() < 1e-10,
                "Expected √2, got {}",
                root
            );
        }

        #[test]
        fn test_ad_matches_explicit() {
            let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

            let root_explicit = solver
                .find_root(|x: f64| x.exp() - 3.0 * x, |x: f64| x.exp() - 3.0, 0.0)
                .unwrap();
            let root_ad = solver.find_root_ad(|x| Ok(x.exp() - 3.0 * x), 0.0).unwrap();

            assert!(
                (root_explicit - root_ad).abs() < 1e-10,
                "Explicit root {} should match AD root {}",
                root_explicit,
                root_ad
            );
        }

        #[test]
        fn test_ad_with_fallible_function() {
            let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

            // ln(x) - 1 = 0 at x = e
            let root = solver.find_root_ad(|x| Ok(x.ln()? - 1.0), 2.0).unwrap();
            assert!((root - std::f64::consts::E).abs() < 1e-10);
        }

        #[test]
        fn test_ad_propagates_evaluation_error() {
            let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

            let err = solver.find_root_ad(|x| x.ln(), -1.0).unwrap_err();
            assert!(matches!(
                err,
                SolverError::Evaluation(DualError::OutOfDomain { function: "ln", .. })
            ));
        }

        #[test]
        fn test_ad_converges_immediately_at_root() {
            let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

            // f(0) = 0 although f'(0) = 0
            let root = solver.find_root_ad(|x| Ok(x * x * x), 0.0).unwrap();
            assert_eq!(root, 0.0);
        }

        #[test]
        fn test_ad_derivative_near_zero() {
            let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

            // Stationary point of x² + 1 at x = 0
            let err = solver.find_root_ad(|x| Ok(x * x + 1.0), 0.0).unwrap_err();
            assert_eq!(err, SolverError::DerivativeNearZero { x: 0.0 });
        }
    }
}
