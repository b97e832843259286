//! Scalar helper functions.

use std::ops::Mul;

use crate::{Epsilon, MinMax};

/// Returns `x * x`.
///
/// # Examples
///
/// ```
/// # use axiom_core::*;
/// assert_eq!(sq(-3), 9);
/// assert_eq!(sq(1.5), 2.25);
/// ```
#[inline]
pub fn sq<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

/// Bounds `v` to the closed range `[lo, hi]`.
///
/// Note the argument order: the bounds come first, the value last.
///
/// # Examples
///
/// ```
/// # use axiom_core::*;
/// assert_eq!(clamp(0, 5, 3), 3);
/// assert_eq!(clamp(0, 5, -3), 0);
/// assert_eq!(clamp(0, 5, 10), 5);
/// ```
#[inline]
pub fn clamp<T: MinMax>(lo: T, hi: T, v: T) -> T {
    lo.max(hi.min(v))
}

/// Returns whether `a` and `b` are less than [`T::EPSILON`][Epsilon::EPSILON] apart.
///
/// See [`nearly_equal_eps`].
#[inline]
pub fn nearly_equal<T>(a: T, b: T) -> bool
where
    T: Epsilon + PartialOrd + std::ops::Sub<Output = T> + Copy,
{
    nearly_equal_eps(a, b, T::EPSILON)
}

/// Returns whether the absolute difference of `a` and `b` is *strictly* less than `epsilon`.
///
/// Values exactly `epsilon` apart are not considered equal. NaN is never equal to anything.
///
/// # Examples
///
/// ```
/// # use axiom_core::*;
/// assert!(nearly_equal_eps(1.0, 1.0 + 1e-6, 1e-5));
/// assert!(!nearly_equal_eps(1.0, 1.0 + 1e-6, 1e-7));
/// assert!(!nearly_equal_eps(1.0, 1.5, 0.5));
/// ```
#[inline]
pub fn nearly_equal_eps<T>(a: T, b: T, epsilon: T) -> bool
where
    T: PartialOrd + std::ops::Sub<Output = T> + Copy,
{
    // Ordering the operands keeps this correct for unsigned types.
    let diff = if a > b {
        a - b
    } else if b > a {
        b - a
    } else if a == b {
        return true;
    } else {
        return false; // unordered (NaN)
    };
    diff < epsilon
}
