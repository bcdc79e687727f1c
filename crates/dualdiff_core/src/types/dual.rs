//! Dual number type for forward-mode automatic differentiation.
//!
//! A [`DualNumber`] pairs a value with its derivative with respect to one
//! independent variable, algebraically `value + derivative·ε` with `ε² = 0`.
//! Every operator and elementary function below returns a new value whose
//! derivative is the exact analytic derivative of the result, so the chain
//! rule falls out of composition.
//!
//! ## Operand Lifting
//!
//! Binary operators accept a `DualNumber` or a plain `f64` or `i32` on
//! either side. The plain operand is lifted through
//! [`IntoDual`](crate::traits::IntoDual) into a constant with derivative 0.0
//! before the operation runs. Reflected operators (`5.0 - x`, `1.0 / x`)
//! lift the left operand and then apply the forward rule in the original
//! operand order.
//!
//! ## Fallible Operations
//!
//! Division returns `Result<DualNumber, DualError>` directly from the `/`
//! operator, as do [`DualNumber::powf`], [`DualNumber::powi`],
//! [`DualNumber::recip`], [`DualNumber::sqrt`] and [`DualNumber::ln`].
//!
//! ## Usage
//!
//! ```
//! use dualdiff_core::types::{DualError, DualNumber};
//!
//! # fn main() -> Result<(), DualError> {
//! let x = DualNumber::variable(2.0); // dx/dx = 1
//!
//! // f(x) = 3x² - 1/x
//! let f = 3.0 * x.powf(2.0)? - (1.0 / x)?;
//!
//! assert_eq!(f.value(), 11.5);       // 12 - 0.5
//! assert_eq!(f.derivative(), 12.25); // 6x + 1/x²
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::traits::IntoDual;
use crate::types::error::DualError;

/// A value together with its derivative with respect to one independent
/// variable.
///
/// Instances are immutable: every operation returns a new `DualNumber`.
///
/// # Construction
///
/// - [`DualNumber::variable`]: the independent variable itself (derivative 1.0)
/// - [`DualNumber::constant`]: a plain constant (derivative 0.0)
/// - [`DualNumber::new`]: an explicit seed derivative
///
/// # Examples
///
/// ```
/// use dualdiff_core::types::DualNumber;
///
/// let x = DualNumber::variable(3.0);
/// let y = x * x;
///
/// assert_eq!(y.value(), 9.0);      // 3² = 9
/// assert_eq!(y.derivative(), 6.0); // d/dx x² = 2x = 6
///
/// // Plain numbers are constants on either side
/// assert_eq!((x + 5.0).into_parts(), (8.0, 1.0));
/// assert_eq!((5.0 - x).into_parts(), (2.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualNumber {
    value: f64,
    derivative: f64,
}

impl DualNumber {
    /// Create a dual number with an explicit seed derivative.
    #[inline]
    pub const fn new(value: f64, derivative: f64) -> Self {
        Self { value, derivative }
    }

    /// Create the independent variable at `value` (`dx/dx = 1`).
    #[inline]
    pub const fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    /// Lift a plain number into a constant (`dk/dx = 0`).
    ///
    /// This is the single lifting function behind every mixed
    /// `DualNumber`/number operator.
    #[inline]
    pub const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Primal value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Derivative with respect to the independent variable.
    #[inline]
    pub const fn derivative(self) -> f64 {
        self.derivative
    }

    /// Split into `(value, derivative)`.
    #[inline]
    pub const fn into_parts(self) -> (f64, f64) {
        (self.value, self.derivative)
    }

    /// Returns `true` if both parts are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite() && self.derivative.is_finite()
    }

    /// Apply the chain rule given `f(self.value)` and `f'(self.value)`.
    ///
    /// A zero seed keeps its sign unless `f'` is infinite, where the
    /// result is `+0.0`.
    #[inline]
    fn chain(self, value: f64, local_derivative: f64) -> Self {
        // Constants stay constant even where f' is unbounded.
        let derivative = if self.derivative == 0.0 && local_derivative.is_infinite() {
            0.0
        } else {
            self.derivative * local_derivative
        };
        Self::new(value, derivative)
    }

    // ========================================
    // Powers
    // ========================================

    /// Raise to a constant real exponent.
    ///
    /// `d/dx a^n = n · a^(n-1) · a'`
    ///
    /// # Errors
    ///
    /// - [`DualError::DomainError`] if the base is negative and `n` is not an
    ///   integer
    /// - [`DualError::DivisionByZero`] if the base is zero and `n` is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use dualdiff_core::types::DualNumber;
    ///
    /// let x = DualNumber::variable(4.0);
    /// let root = x.powf(0.5).unwrap();
    /// assert_eq!(root.into_parts(), (2.0, 0.25));
    ///
    /// assert!(DualNumber::variable(-4.0).powf(0.5).is_err());
    /// ```
    pub fn powf(self, n: f64) -> Result<Self, DualError> {
        if self.value < 0.0 && n.fract() != 0.0 {
            return Err(DualError::DomainError {
                base: self.value,
                exponent: n,
            });
        }
        if n == 0.0 {
            return Ok(Self::constant(1.0));
        }
        if self.value == 0.0 && n < 0.0 {
            return Err(DualError::DivisionByZero { numerator: 1.0 });
        }
        Ok(self.chain(self.value.powf(n), n * self.value.powf(n - 1.0)))
    }

    /// Raise to a constant integer exponent.
    ///
    /// # Errors
    ///
    /// [`DualError::DivisionByZero`] if the base is zero and `n` is negative.
    pub fn powi(self, n: i32) -> Result<Self, DualError> {
        if n == 0 {
            return Ok(Self::constant(1.0));
        }
        if self.value == 0.0 && n < 0 {
            return Err(DualError::DivisionByZero { numerator: 1.0 });
        }
        Ok(self.chain(self.value.powi(n), f64::from(n) * self.value.powi(n - 1)))
    }

    /// Reciprocal `1/a`, with `d/dx (1/a) = -a'/a²`.
    ///
    /// # Errors
    ///
    /// [`DualError::DivisionByZero`] if the value is zero.
    pub fn recip(self) -> Result<Self, DualError> {
        if self.value == 0.0 {
            return Err(DualError::DivisionByZero { numerator: 1.0 });
        }
        let inv = self.value.recip();
        Ok(self.chain(inv, -inv * inv))
    }

    /// Square root, with `d/dx √a = a' / (2√a)`.
    ///
    /// # Errors
    ///
    /// [`DualError::OutOfDomain`] if the value is negative.
    pub fn sqrt(self) -> Result<Self, DualError> {
        if self.value < 0.0 {
            return Err(DualError::OutOfDomain {
                function: "sqrt",
                value: self.value,
            });
        }
        let s = self.value.sqrt();
        Ok(self.chain(s, 0.5 / s))
    }

    // ========================================
    // Exponential and logarithm
    // ========================================

    /// Exponential, with `d/dx e^a = e^a · a'`.
    ///
    /// Total over all inputs, including negative values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualdiff_core::types::DualNumber;
    ///
    /// let y = DualNumber::variable(0.0).exp();
    /// assert_eq!(y.into_parts(), (1.0, 1.0));
    /// ```
    #[inline]
    pub fn exp(self) -> Self {
        let e = self.value.exp();
        self.chain(e, e)
    }

    /// Natural logarithm, with `d/dx ln a = a'/a`.
    ///
    /// # Errors
    ///
    /// [`DualError::OutOfDomain`] if the value is zero or negative.
    pub fn ln(self) -> Result<Self, DualError> {
        if self.value <= 0.0 {
            return Err(DualError::OutOfDomain {
                function: "ln",
                value: self.value,
            });
        }
        Ok(self.chain(self.value.ln(), self.value.recip()))
    }

    // ========================================
    // Trigonometric and hyperbolic
    // ========================================

    /// Sine, with `d/dx sin a = cos a · a'`.
    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.value.sin(), self.value.cos())
    }

    /// Cosine, with `d/dx cos a = -sin a · a'`.
    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.value.cos(), -self.value.sin())
    }

    /// Hyperbolic tangent, with `d/dx tanh a = (1 - tanh² a) · a'`.
    #[inline]
    pub fn tanh(self) -> Self {
        let t = self.value.tanh();
        self.chain(t, 1.0 - t * t)
    }
}

impl Default for DualNumber {
    /// The constant zero.
    fn default() -> Self {
        Self::constant(0.0)
    }
}

impl From<f64> for DualNumber {
    /// Lift a plain number into a constant.
    fn from(value: f64) -> Self {
        value.into_dual()
    }
}

impl fmt::Display for DualNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.value, self.derivative)
    }
}

// ========================================
// Forward operators: DualNumber (op) impl IntoDual
// ========================================

impl<R: IntoDual> Add<R> for DualNumber {
    type Output = DualNumber;

    #[inline]
    fn add(self, rhs: R) -> DualNumber {
        let rhs = rhs.into_dual();
        DualNumber::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl<R: IntoDual> Sub<R> for DualNumber {
    type Output = DualNumber;

    #[inline]
    fn sub(self, rhs: R) -> DualNumber {
        let rhs = rhs.into_dual();
        DualNumber::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl<R: IntoDual> Mul<R> for DualNumber {
    type Output = DualNumber;

    #[inline]
    fn mul(self, rhs: R) -> DualNumber {
        let rhs = rhs.into_dual();
        DualNumber::new(
            self.value * rhs.value,
            self.derivative * rhs.value + self.value * rhs.derivative,
        )
    }
}

impl<R: IntoDual> Div<R> for DualNumber {
    type Output = Result<DualNumber, DualError>;

    /// Quotient rule: `(a'b - ab') / b²`, evaluated as `(a' - (a/b)·b') / b`
    /// so that `b²` never underflows or overflows on its own.
    ///
    /// # Errors
    ///
    /// [`DualError::DivisionByZero`] if the divisor's value is exactly zero.
    fn div(self, rhs: R) -> Result<DualNumber, DualError> {
        let rhs = rhs.into_dual();
        if rhs.value == 0.0 {
            return Err(DualError::DivisionByZero {
                numerator: self.value,
            });
        }
        let quotient = self.value / rhs.value;
        Ok(DualNumber::new(
            quotient,
            (self.derivative - quotient * rhs.derivative) / rhs.value,
        ))
    }
}

impl Neg for DualNumber {
    type Output = DualNumber;

    #[inline]
    fn neg(self) -> DualNumber {
        DualNumber::new(-self.value, -self.derivative)
    }
}

// ========================================
// Reflected operators: number (op) DualNumber
// ========================================

macro_rules! impl_reflected_ops {
    ($($scalar:ty),* $(,)?) => {$(
        impl Add<DualNumber> for $scalar {
            type Output = DualNumber;

            #[inline]
            fn add(self, rhs: DualNumber) -> DualNumber {
                self.into_dual() + rhs
            }
        }

        impl Sub<DualNumber> for $scalar {
            type Output = DualNumber;

            #[inline]
            fn sub(self, rhs: DualNumber) -> DualNumber {
                self.into_dual() - rhs
            }
        }

        impl Mul<DualNumber> for $scalar {
            type Output = DualNumber;

            #[inline]
            fn mul(self, rhs: DualNumber) -> DualNumber {
                self.into_dual() * rhs
            }
        }

        impl Div<DualNumber> for $scalar {
            type Output = Result<DualNumber, DualError>;

            #[inline]
            fn div(self, rhs: DualNumber) -> Result<DualNumber, DualError> {
                self.into_dual() / rhs
            }
        }
    )*};
}

impl_reflected_ops!(f64, i32);

// ========================================
// Algebraic identities and folds
// ========================================

impl Zero for DualNumber {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.derivative == 0.0
    }
}

impl One for DualNumber {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl Sum for DualNumber {
    fn sum<I: Iterator<Item = DualNumber>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for DualNumber {
    fn product<I: Iterator<Item = DualNumber>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
