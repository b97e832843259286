//! Capability traits for the scalar types stored in vectors and matrices.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types with a smallest and largest representable value.
///
/// For floating-point types, [`Bounded::MIN`] and [`Bounded::MAX`] are the most negative and most
/// positive *finite* values. [`Bounded::LEAST`] and [`Bounded::GREATEST`] are the ends of the
/// type's ordering, which are the infinities for floats and coincide with `MIN`/`MAX` for integers.
pub trait Bounded {
    const MIN: Self;
    const MAX: Self;
    /// No value of the type compares less than this one.
    const LEAST: Self;
    /// No value of the type compares greater than this one.
    const GREATEST: Self;
}

/// Types with a tolerance used for approximate comparisons.
///
/// [`f32`] and [`f64`] use their machine epsilon. Integer types use `1`, which makes
/// [`nearly_equal`][crate::nearly_equal] an exact comparison for them.
pub trait Epsilon {
    const EPSILON: Self;
}

/// Types that support computing their absolute value.
///
/// Unsigned integers return `self` unchanged.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Conversion to [`f64`], the widest floating-point type available.
///
/// Used wherever a result is accumulated in extended precision. The conversion is exact for every
/// type except 64- and 128-bit integers with a magnitude above 2<sup>53</sup>.
pub trait Widen {
    fn widen(self) -> f64;
}

/// A numeric element type of `axiom-linalg` vectors and matrices.
///
/// This is implemented for all built-in integer types as well as [`f32`] and [`f64`].
pub trait Scalar:
    Zero
    + One
    + Bounded
    + Epsilon
    + Abs
    + MinMax
    + Widen
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialOrd
    + Copy
{
}
impl<T> Scalar for T where
    T: Zero
        + One
        + Bounded
        + Epsilon
        + Abs
        + MinMax
        + Widen
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialOrd
        + Copy
{
}

/// Floating-point scalars.
pub trait Float: Scalar + ops::Neg<Output = Self> {
    fn sqrt(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Narrows an [`f64`] to `Self`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
            impl Bounded for $types {
                const MIN: Self = <$types>::MIN;
                const MAX: Self = <$types>::MAX;
                const LEAST: Self = <$types>::MIN;
                const GREATEST: Self = <$types>::MAX;
            }
            impl Epsilon for $types {
                const EPSILON: Self = 1;
            }
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
            impl Widen for $types {
                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! signed_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128, isize);

macro_rules! unsigned_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )+
    };
}
unsigned_abs!(u8, u16, u32, u64, u128, usize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }
            impl Bounded for $types {
                const MIN: Self = $types::MIN;
                const MAX: Self = $types::MAX;
                const LEAST: Self = $types::NEG_INFINITY;
                const GREATEST: Self = $types::INFINITY;
            }
            impl Epsilon for $types {
                const EPSILON: Self = $types::EPSILON;
            }
            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    $types::abs(self)
                }
            }
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    $types::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    $types::max(self, other)
                }
            }
            impl Widen for $types {
                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }
            }
            impl Float for $types {
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }

                fn floor(self) -> Self {
                    $types::floor(self)
                }

                fn ceil(self) -> Self {
                    $types::ceil(self)
                }

                fn from_f64(value: f64) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float_impls!(f32, f64);
