//! Core traits for generic numerics and lifting into dual numbers.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait), used by solver configuration
//! - Promotion of plain numbers into [`DualNumber`] (`IntoDual` trait)

use crate::types::DualNumber;

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use dualdiff_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

/// Conversion of an operand into a [`DualNumber`].
///
/// Every binary operator on `DualNumber` calls `into_dual` on its other
/// operand before combining. Plain numbers become constants (derivative
/// 0.0) via [`DualNumber::constant`]; dual numbers pass through unchanged.
///
/// # Examples
/// ```
/// use dualdiff_core::traits::IntoDual;
/// use dualdiff_core::types::DualNumber;
///
/// let k = 5.0_f64.into_dual();
/// assert_eq!(k.value(), 5.0);
/// assert_eq!(k.derivative(), 0.0);
///
/// let x = DualNumber::variable(2.0);
/// assert_eq!(x.into_dual(), x);
/// ```
pub trait IntoDual: Copy {
    /// Converts `self` into a dual number.
    fn into_dual(self) -> DualNumber;
}

impl IntoDual for DualNumber {
    #[inline]
    fn into_dual(self) -> DualNumber {
        self
    }
}

impl IntoDual for f64 {
    #[inline]
    fn into_dual(self) -> DualNumber {
        DualNumber::constant(self)
    }
}

impl IntoDual for i32 {
    #[inline]
    fn into_dual(self) -> DualNumber {
        DualNumber::constant(f64::from(self))
    }
}
