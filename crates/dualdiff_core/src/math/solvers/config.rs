//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use dualdiff_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration, validated
/// let custom = SolverConfig::new(1e-12, 200).unwrap();
/// assert_eq!(custom.max_iterations, 200);
/// assert!(SolverConfig::new(0.0, 200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance: the solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before giving up with
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,

    /// Smallest `|f'(x)|` accepted for a Newton step.
    pub derivative_floor: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    /// - `derivative_floor`: 1e-30 (clamped to the type's smallest positive normal)
    fn default() -> Self {
        Self {
            tolerance: constant(1e-10),
            max_iterations: 100,
            derivative_floor: constant(1e-30),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with the default derivative floor.
    ///
    /// # Errors
    ///
    /// `SolverError::InvalidConfig` if `tolerance` is not a positive finite
    /// number or `max_iterations` is zero.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        if !(tolerance > T::zero() && tolerance.is_finite()) {
            return Err(SolverError::InvalidConfig(
                "tolerance must be positive and finite".to_string(),
            ));
        }
        if max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
            ..Self::default()
        })
    }

    /// Replace the derivative floor.
    ///
    /// # Errors
    ///
    /// `SolverError::InvalidConfig` if `floor` is negative or not finite.
    pub fn with_derivative_floor(self, floor: T) -> Result<Self, SolverError> {
        if !(floor >= T::zero() && floor.is_finite()) {
            return Err(SolverError::InvalidConfig(
                "derivative_floor must be non-negative and finite".to_string(),
            ));
        }
        Ok(Self {
            derivative_floor: floor,
            ..self
        })
    }

    /// Tight tolerance (1e-14) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: constant(1e-14),
            max_iterations: 500,
            ..Self::default()
        }
    }

    /// Relaxed tolerance (1e-6) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: constant(1e-6),
            max_iterations: 50,
            ..Self::default()
        }
    }
}

/// Convert an `f64` constant, saturating to the smallest positive normal
/// of `T` when it underflows.
fn constant<T: Float>(value: f64) -> T {
    T::from(value)
        .filter(|v| *v > T::zero())
        .unwrap_or_else(T::min_positive_value)
}
