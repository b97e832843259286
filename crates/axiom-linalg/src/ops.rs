//! Free functions operating on one or two [`Vector`]s.
//!
//! Functions taking two vectors require them to have the same length and return
//! [`ErrorKind::ShapeMismatch`] otherwise. Functions that divide by a quantity derived from their
//! input return [`ErrorKind::DivideByZero`] when that quantity is exactly zero.
//!
//! [`ErrorKind::ShapeMismatch`]: crate::ErrorKind::ShapeMismatch
//! [`ErrorKind::DivideByZero`]: crate::ErrorKind::DivideByZero

use axiom_core::{nearly_equal, nearly_equal_eps, sq, Error, Float, Result, Scalar};

use crate::Vector;

/// Selects which norm [`norm`] and [`Vector::norm`] compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormOrder {
    /// The largest absolute value of any element.
    Infinity,
    /// The sum of absolute values.
    L1,
    /// The Euclidean length.
    L2,
}

/// Maps `0` to [`NormOrder::Infinity`], `1` to [`NormOrder::L1`] and `2` to [`NormOrder::L2`].
impl TryFrom<usize> for NormOrder {
    type Error = Error;

    fn try_from(order: usize) -> Result<Self> {
        match order {
            0 => Ok(NormOrder::Infinity),
            1 => Ok(NormOrder::L1),
            2 => Ok(NormOrder::L2),
            _ => Err(Error::invalid_argument(format!(
                "norm: order must be 0, 1, or 2 (got {order})"
            ))),
        }
    }
}

/// Computes the dot product of `a` and `b`.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let a = Vector::from_vec(vec![1, 3, -5])?;
/// let b = Vector::from_vec(vec![4, -2, -1])?;
/// assert_eq!(dot(&a, &b)?, 3);
/// # Ok::<(), Error>(())
/// ```
pub fn dot<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    a.check_same_len(b, "dot")?;
    Ok(a
        .iter()
        .zip(b)
        .fold(T::ZERO, |acc, (&x, &y)| acc + x * y))
}

/// Returns whether `a` and `b` are orthogonal, ie. whether their dot product is
/// [nearly zero](axiom_core::nearly_equal).
pub fn is_orthogonal<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    Ok(nearly_equal(dot(a, b)?, T::ZERO))
}

/// Computes a norm of `v`.
///
/// `order` selects the norm: `0` is the infinity norm, `1` the L1 norm, and `2` the L2 norm.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] for any other
/// `order`.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let v = Vector::from_vec(vec![3, -4])?;
/// assert_eq!(norm(&v, 0)?, 4.0);
/// assert_eq!(norm(&v, 1)?, 7.0);
/// assert_eq!(norm(&v, 2)?, 5.0);
/// assert!(norm(&v, 3).is_err());
/// # Ok::<(), Error>(())
/// ```
pub fn norm<T: Scalar>(v: &Vector<T>, order: usize) -> Result<f64> {
    Ok(v.norm(NormOrder::try_from(order)?))
}

/// Returns the Euclidean length of `v`.
pub fn len<T: Scalar>(v: &Vector<T>) -> f64 {
    v.l2_norm()
}

/// Returns the squared Euclidean length of `v`, accumulated as [`f64`].
pub fn len_squared<T: Scalar>(v: &Vector<T>) -> f64 {
    v.iter().map(|&x| sq(x.widen())).sum()
}

/// Projects `u` onto `v`.
///
/// # Errors
///
/// Returns [`ErrorKind::DivideByZero`][crate::ErrorKind::DivideByZero] if `v` is the zero
/// vector.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let u = Vector::from_vec(vec![2.0, 3.0])?;
/// let v = Vector::from_vec(vec![4.0, 0.0])?;
/// assert_eq!(proj(&u, &v)?, [2.0, 0.0]);
/// # Ok::<(), Error>(())
/// ```
pub fn proj<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<Vector<T>> {
    let numerator = dot(u, v)?;
    let denominator = dot(v, v)?;
    if denominator == T::ZERO {
        return Err(Error::divide_by_zero("proj: cannot project onto a zero vector"));
    }
    Ok(v.scale(numerator / denominator))
}

/// Returns whether every element of `v` is within [`T::EPSILON`][axiom_core::Epsilon] of the
/// corresponding element of `w`.
///
/// See [`is_approx_eps`].
pub fn is_approx<T: Scalar>(v: &Vector<T>, w: &Vector<T>) -> Result<bool> {
    is_approx_eps(v, w, T::EPSILON)
}

/// Returns whether every element of `v` is less than `epsilon` apart from the corresponding
/// element of `w`.
///
/// The comparison is strict: elements exactly `epsilon` apart are not approximately equal.
pub fn is_approx_eps<T: Scalar>(v: &Vector<T>, w: &Vector<T>, epsilon: T) -> Result<bool> {
    v.check_same_len(w, "is_approx")?;
    Ok(v
        .iter()
        .zip(w)
        .all(|(&a, &b)| nearly_equal_eps(a, b, epsilon)))
}

/// Divides `v` by its length, resulting in a unit vector.
///
/// # Errors
///
/// Returns [`ErrorKind::DivideByZero`][crate::ErrorKind::DivideByZero] if `v` has zero length.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let v = Vector::from_vec(vec![0.0, 0.0, 4.0])?;
/// assert_eq!(normalize(&v)?, [0.0, 0.0, 1.0]);
/// # Ok::<(), Error>(())
/// ```
pub fn normalize<T: Float>(v: &Vector<T>) -> Result<Vector<T>> {
    let length = len(v);
    if length == 0.0 {
        return Err(Error::divide_by_zero("normalize: vector has zero length"));
    }
    // Narrowing the length could overflow `T`, so divide in `f64` and narrow each quotient.
    Ok(v.map(|x| T::from_f64(x.widen() / length)))
}

/// Returns the squared Euclidean distance between `a` and `b`.
///
/// The result has the element type; use [`distance`] for large integer inputs.
pub fn distance_squared<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    a.check_same_len(b, "distance_squared")?;
    Ok(a
        .iter()
        .zip(b)
        .fold(T::ZERO, |acc, (&x, &y)| acc + sq(abs_diff(x, y))))
}

/// Returns the Euclidean distance between `a` and `b`.
pub fn distance<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<f64> {
    Ok(distance_squared(a, b)?.widen().sqrt())
}

/// Computes the cross product of two 3-dimensional vectors.
///
/// # Errors
///
/// Returns [`ErrorKind::ShapeMismatch`][crate::ErrorKind::ShapeMismatch] unless both `u` and `v`
/// have exactly 3 elements.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let x = Vector::from_vec(vec![1, 0, 0])?;
/// let y = Vector::from_vec(vec![0, 1, 0])?;
/// assert_eq!(cross(&x, &y)?, [0, 0, 1]);
/// assert_eq!(cross(&y, &x)?, [0, 0, -1]);
/// # Ok::<(), Error>(())
/// ```
pub fn cross<T: Scalar>(u: &Vector<T>, v: &Vector<T>) -> Result<Vector<T>> {
    let (&[a1, a2, a3], &[b1, b2, b3]) = (u.as_slice(), v.as_slice()) else {
        return Err(Error::shape_mismatch(format!(
            "cross: both vectors must have 3 elements ({} and {})",
            u.len(),
            v.len()
        )));
    };

    #[rustfmt::skip]
    let cross = vec![
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ];
    Ok(Vector::from_nonempty(cross))
}

/// Reflects `v` off the plane with normal `n`, computing `v - 2 * dot(v, n) * n`.
///
/// `n` is expected to be a unit vector. This is not checked.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let v = Vector::from_vec(vec![1.0, -1.0])?;
/// let n = Vector::from_vec(vec![0.0, 1.0])?;
/// assert_eq!(reflect(&v, &n)?, [1.0, 1.0]);
/// # Ok::<(), Error>(())
/// ```
pub fn reflect<T: Scalar>(v: &Vector<T>, n: &Vector<T>) -> Result<Vector<T>> {
    let two = T::ONE + T::ONE;
    let d = dot(v, n)?;
    v.subtract(&n.scale(two * d))
}

/// Linearly interpolates between `a` (at `t = 0`) and `b` (at `t = 1`).
///
/// `t` is not clamped, so values outside of `[0, 1]` extrapolate.
pub fn lerp<T: Float>(a: &Vector<T>, b: &Vector<T>, t: T) -> Result<Vector<T>> {
    a.zip_map(b, "lerp", |x, y| x + (y - x) * t)
}

/// Combines `a` and `b` element by element using `op`.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let a = Vector::from_vec(vec![1, 2, 3])?;
/// let b = Vector::from_vec(vec![4, 5, 6])?;
/// assert_eq!(cwise_binary(&a, &b, |x, y| x * y)?, [4, 10, 18]);
/// # Ok::<(), Error>(())
/// ```
pub fn cwise_binary<T, U, F>(a: &Vector<T>, b: &Vector<T>, op: F) -> Result<Vector<U>>
where
    T: Copy,
    F: FnMut(T, T) -> U,
{
    a.zip_map(b, "cwise_binary", op)
}

/// Element-wise minimum of `a` and `b`.
pub fn min<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.zip_map(b, "min", T::min)
}

/// Element-wise maximum of `a` and `b`.
pub fn max<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.zip_map(b, "max", T::max)
}

/// Element-wise absolute value.
pub fn abs<T: Scalar>(v: &Vector<T>) -> Vector<T> {
    v.map(T::abs)
}

/// Element-wise floor.
pub fn floor<T: Float>(v: &Vector<T>) -> Vector<T> {
    v.map(T::floor)
}

/// Element-wise ceiling.
pub fn ceil<T: Float>(v: &Vector<T>) -> Vector<T> {
    v.map(T::ceil)
}

/// Bounds every element of `v` to the range `[low, high]`.
pub fn clamp<T: Scalar>(v: &Vector<T>, low: T, high: T) -> Vector<T> {
    v.map(|x| axiom_core::clamp(low, high, x))
}

/// Returns the sum of all elements.
pub fn sum<T: Scalar>(v: &Vector<T>) -> T {
    v.iter().fold(T::ZERO, |acc, &x| acc + x)
}

/// Returns the smallest element of `v`.
///
/// The result is always an element of `v`; ties and unordered values (NaN) are resolved as in
/// [`arg_min`].
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `v` has been
/// resized to be empty.
pub fn min_coeff<T: Scalar>(v: &Vector<T>) -> Result<T> {
    Ok(v[arg_min(v)?])
}

/// Returns the largest element of `v`.
///
/// The result is always an element of `v`; ties and unordered values (NaN) are resolved as in
/// [`arg_max`].
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `v` has been
/// resized to be empty.
pub fn max_coeff<T: Scalar>(v: &Vector<T>) -> Result<T> {
    Ok(v[arg_max(v)?])
}

/// Returns the index of the smallest element of `v`.
///
/// If the minimum occurs more than once, the index of its first occurrence is returned.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `v` has been
/// resized to be empty.
///
/// # Examples
///
/// ```
/// # use axiom_linalg::*;
/// let v = Vector::from_vec(vec![3, 1, 4, 1, 5])?;
/// assert_eq!(arg_min(&v)?, 1);
/// assert_eq!(arg_max(&v)?, 4);
/// # Ok::<(), Error>(())
/// ```
pub fn arg_min<T: Scalar>(v: &Vector<T>) -> Result<usize> {
    arg_best(v, "arg_min", T::GREATEST, |x, best| x < best)
}

/// Returns the index of the largest element of `v`.
///
/// If the maximum occurs more than once, the index of its first occurrence is returned.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `v` has been
/// resized to be empty.
pub fn arg_max<T: Scalar>(v: &Vector<T>) -> Result<usize> {
    arg_best(v, "arg_max", T::LEAST, |x, best| x > best)
}

/// Scans `v` for the first element that is strictly `better` than every element before it and
/// than `seed`. Index 0 wins if no element beats the seed.
fn arg_best<T, F>(v: &Vector<T>, what: &str, seed: T, better: F) -> Result<usize>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    if v.is_empty() {
        return Err(Error::invalid_argument(format!(
            "{what}: vector is empty"
        )));
    }

    let mut best = seed;
    let mut best_index = 0;
    for (i, &x) in v.iter().enumerate() {
        if better(x, best) {
            best = x;
            best_index = i;
        }
    }
    Ok(best_index)
}

/// `|a - b|`, without underflowing for unsigned types.
#[inline]
fn abs_diff<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}
