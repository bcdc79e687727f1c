//! Point evaluation of derivatives.
//!
//! [`derivative`] and [`try_derivative`] seed the independent variable at a
//! point and run a function written over [`DualNumber`], returning the value
//! and derivative computed in the same pass. [`central_difference`] is the
//! bump-and-revalue reference used to check AD results.
//!
//! ## Usage
//!
//! ```rust
//! use dualdiff_core::math::derivative::{central_difference, derivative};
//!
//! // f(x) = x³ at x = 2
//! let ad = derivative(|x| x * x * x, 2.0);
//! let fd = central_difference(|x| x * x * x, 2.0, 1e-5);
//!
//! assert_eq!(ad.into_parts(), (8.0, 12.0));
//! assert!((ad.derivative() - fd).abs() < 1e-6);
//! ```

use crate::types::{DualError, DualNumber};

/// Evaluate an infallible function and its derivative at `x`.
///
/// # Arguments
///
/// * `f` - Function of the independent variable
/// * `x` - Evaluation point
///
/// # Returns
///
/// `f(x)` carrying `f'(x)` in its derivative part.
#[inline]
pub fn derivative<F>(f: F, x: f64) -> DualNumber
where
    F: FnOnce(DualNumber) -> DualNumber,
{
    f(DualNumber::variable(x))
}

/// Evaluate a fallible function and its derivative at `x`.
///
/// # Errors
///
/// Propagates any [`DualError`] raised while evaluating `f`.
///
/// # Examples
///
/// ```rust
/// use dualdiff_core::math::derivative::try_derivative;
///
/// // f(x) = 1/x at x = 2
/// let y = try_derivative(|x| 1.0 / x, 2.0).unwrap();
/// assert_eq!(y.into_parts(), (0.5, -0.25));
///
/// assert!(try_derivative(|x| 1.0 / x, 0.0).is_err());
/// ```
#[inline]
pub fn try_derivative<F>(f: F, x: f64) -> Result<DualNumber, DualError>
where
    F: FnOnce(DualNumber) -> Result<DualNumber, DualError>,
{
    f(DualNumber::variable(x))
}

/// Central finite-difference estimate of `f'(x)`.
///
/// Uses `(f(x + h) - f(x - h)) / (2h)`, accurate to `O(h²)`.
///
/// # Arguments
///
/// * `f` - Plain `f64` function
/// * `x` - Evaluation point
/// * `h` - Bump size
///
/// `h = 0.0` gives `0/0`, so the result is NaN.
pub fn central_difference<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}
