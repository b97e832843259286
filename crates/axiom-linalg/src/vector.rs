use std::{fmt, slice, vec};

use axiom_core::{axiom_assert, Error, One, Result, Scalar, Zero};

use crate::NormOrder;

mod ops;

/// A dense, heap-allocated vector storing elements of type `T`.
///
/// A [`Vector`] always contains at least one element after construction. The only way to obtain
/// an empty [`Vector`] is [`Vector::resize`] (or [`Vector::resize_with_value`]) with a length of
/// 0; the reductions in [`crate::ops`] reject such vectors with [`ErrorKind::InvalidArgument`].
///
/// # Construction
///
/// - [`Vector::from_vec`] (and the equivalent [`TryFrom`] impl) takes ownership of an existing
///   [`Vec`].
/// - [`Vector::zeros`] and [`Vector::ones`] create a vector of a given length where every element
///   is 0 or 1, respectively. [`Vector::new`] is an alias for [`Vector::zeros`].
///
/// All constructors fail with [`ErrorKind::InvalidArgument`] if the vector would be empty.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls perform no validation of their own. An out-of-range
///   index panics, just like it does for slices.
/// - [`Vector::at`] and [`Vector::at_mut`] perform checked access and return
///   [`ErrorKind::OutOfBounds`] instead.
/// - [`Vector::as_slice`], [`Vector::iter`] and the [`IntoIterator`] impls expose the elements in
///   order.
///
/// # Arithmetic
///
/// Arithmetic is available both as named methods and as operators. The named methods return
/// [`Result`]s; the operators forward to them:
///
/// | Operation            | Method                                          | Operator          |
/// |----------------------|-------------------------------------------------|-------------------|
/// | element-wise sum     | [`add`][Self::add], [`add_in_place`][Self::add_in_place] | `&a + &b`, `a += &b` |
/// | element-wise diff    | [`subtract`][Self::subtract], [`subtract_in_place`][Self::subtract_in_place] | `&a - &b`, `a -= &b` |
/// | scaling              | [`scale`][Self::scale], [`scale_in_place`][Self::scale_in_place] | `&a * s`, `a *= s` |
/// | division by a scalar | [`divide`][Self::divide], [`divide_in_place`][Self::divide_in_place] | `&a / s`, `a /= s` |
/// | negation             | [`negate`][Self::negate]                        | `-&a`             |
///
/// The binary operators `+`, `-` and `/` evaluate to a [`Result`]. The compound assignment
/// operators `+=`, `-=` and `/=` cannot return an error and panic instead.
///
/// [`ErrorKind::InvalidArgument`]: crate::ErrorKind::InvalidArgument
/// [`ErrorKind::OutOfBounds`]: crate::ErrorKind::OutOfBounds
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T>(Vec<T>);

impl<T> Vector<T> {
    /// Creates a [`Vector`] that takes ownership of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `data` is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let v = Vector::from_vec(vec![1, 2, 3])?;
    /// assert_eq!(v.len(), 3);
    /// assert!(Vector::<i32>::from_vec(vec![]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::invalid_argument(
                "Vector::from_vec: data must be non-empty",
            ));
        }
        Ok(Self(data))
    }

    /// Wraps `data`, which the caller has established to be non-empty.
    pub(crate) fn from_nonempty(data: Vec<T>) -> Self {
        axiom_assert!(!data.is_empty(), "vector data must be non-empty");
        Self(data)
    }

    fn filled(len: usize, value: T, what: &str) -> Result<Self>
    where
        T: Clone,
    {
        if len == 0 {
            return Err(Error::invalid_argument(format!(
                "Vector::{what}: length must be >= 1"
            )));
        }
        Ok(Self(vec![value; len]))
    }

    /// Returns the number of elements in this [`Vector`].
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this [`Vector`] has been resized to a length of 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Converts this [`Vector`] back into the [`Vec`] backing it.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfBounds`][crate::ErrorKind::OutOfBounds] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let v = Vector::from_vec(vec![10, 20, 30])?;
    /// assert_eq!(v.at(2), Ok(&30));
    /// assert_eq!(v.at(3).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.0.get(index).ok_or_else(|| out_of_bounds(index, len))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfBounds`][crate::ErrorKind::OutOfBounds] if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.0.get_mut(index).ok_or_else(|| out_of_bounds(index, len))
    }

    /// Applies a closure to each element, returning a new vector of the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let v = Vector::from_vec(vec![1, 2, 3])?.map(|i| i * 10);
    /// assert_eq!(v, [10, 20, 30]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn map<U, F>(&self, f: F) -> Vector<U>
    where
        T: Copy,
        F: FnMut(T) -> U,
    {
        Vector(self.0.iter().copied().map(f).collect())
    }

    /// Combines `self` and `other` element by element, after checking that their lengths match.
    ///
    /// `what` names the operation in the error message.
    pub(crate) fn zip_map<U, F>(&self, other: &Vector<T>, what: &str, mut f: F) -> Result<Vector<U>>
    where
        T: Copy,
        F: FnMut(T, T) -> U,
    {
        self.check_same_len(other, what)?;
        Ok(Vector(
            itertools::zip_eq(&self.0, &other.0)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    pub(crate) fn check_same_len<U>(&self, other: &Vector<U>, what: &str) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::shape_mismatch(format!(
                "{what}: vectors must have the same length ({} vs {})",
                self.len(),
                other.len()
            )));
        }
        Ok(())
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }

    /// Changes the length of this [`Vector`], initializing new elements with `value`.
    ///
    /// Resizing to a length of 0 is allowed, but leaves an empty vector that most operations will
    /// reject.
    pub fn resize_with_value(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        if len == 0 {
            log::debug!("resizing vector of length {} to 0", self.len());
        }
        self.0.resize(len, value);
    }
}

impl<T: Zero + Clone> Vector<T> {
    /// Creates a vector of length `len` with every element set to [`T::ZERO`][Zero::ZERO].
    ///
    /// Equivalent to [`Vector::zeros`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `len` is 0.
    pub fn new(len: usize) -> Result<Self> {
        Self::filled(len, T::ZERO, "new")
    }

    /// Creates a vector of length `len` with every element set to [`T::ZERO`][Zero::ZERO].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `len` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// assert_eq!(Vector::<f32>::zeros(3)?, [0.0, 0.0, 0.0]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn zeros(len: usize) -> Result<Self> {
        Self::filled(len, T::ZERO, "zeros")
    }

    /// Changes the length of this [`Vector`], initializing new elements with
    /// [`T::ZERO`][Zero::ZERO].
    ///
    /// See [`Vector::resize_with_value`].
    pub fn resize(&mut self, len: usize) {
        self.resize_with_value(len, T::ZERO);
    }
}

impl<T: One + Clone> Vector<T> {
    /// Creates a vector of length `len` with every element set to [`T::ONE`][One::ONE].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `len` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// assert_eq!(Vector::<u8>::ones(2)?, [1, 1]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn ones(len: usize) -> Result<Self> {
        Self::filled(len, T::ONE, "ones")
    }
}

impl<T: Scalar> Vector<T> {
    /// Element-wise addition, returning a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ShapeMismatch`][crate::ErrorKind::ShapeMismatch] if the lengths of
    /// `self` and `other` differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "Vector::add", |a, b| a + b)
    }

    /// Element-wise subtraction, returning a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ShapeMismatch`][crate::ErrorKind::ShapeMismatch] if the lengths of
    /// `self` and `other` differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "Vector::subtract", |a, b| a - b)
    }

    /// Element-wise addition of `other` to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ShapeMismatch`][crate::ErrorKind::ShapeMismatch] if the lengths of
    /// `self` and `other` differ. `self` is left unmodified in that case.
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_len(other, "Vector::add_in_place")?;
        for (lhs, &rhs) in self.0.iter_mut().zip(&other.0) {
            *lhs = *lhs + rhs;
        }
        Ok(())
    }

    /// Element-wise subtraction of `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ShapeMismatch`][crate::ErrorKind::ShapeMismatch] if the lengths of
    /// `self` and `other` differ. `self` is left unmodified in that case.
    pub fn subtract_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_len(other, "Vector::subtract_in_place")?;
        for (lhs, &rhs) in self.0.iter_mut().zip(&other.0) {
            *lhs = *lhs - rhs;
        }
        Ok(())
    }

    /// Multiplies every element by `factor`, returning a new vector.
    pub fn scale(&self, factor: T) -> Self {
        self.map(|elem| elem * factor)
    }

    /// Multiplies every element by `factor`.
    pub fn scale_in_place(&mut self, factor: T) {
        self.0.iter_mut().for_each(|elem| *elem = *elem * factor);
    }

    /// Divides every element by `divisor`, returning a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DivideByZero`][crate::ErrorKind::DivideByZero] if `divisor` is
    /// exactly [`T::ZERO`][Zero::ZERO].
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let v = Vector::from_vec(vec![2.0, 4.0])?;
    /// assert_eq!(v.divide(2.0)?, [1.0, 2.0]);
    /// assert_eq!(v.divide(0.0).unwrap_err().kind(), ErrorKind::DivideByZero);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn divide(&self, divisor: T) -> Result<Self> {
        check_divisor(divisor, "Vector::divide")?;
        Ok(self.map(|elem| elem / divisor))
    }

    /// Divides every element by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DivideByZero`][crate::ErrorKind::DivideByZero] if `divisor` is
    /// exactly [`T::ZERO`][Zero::ZERO]. `self` is left unmodified in that case.
    pub fn divide_in_place(&mut self, divisor: T) -> Result<()> {
        check_divisor(divisor, "Vector::divide_in_place")?;
        self.0.iter_mut().for_each(|elem| *elem = *elem / divisor);
        Ok(())
    }

    /// Returns the L1 norm (the sum of the absolute values of all elements).
    pub fn l1_norm(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem.abs())
    }

    /// Returns the L2 (Euclidean) norm.
    ///
    /// The squares are accumulated as [`f64`] regardless of `T`, so this does not overflow for
    /// integer element types and keeps more precision for [`f32`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let v = Vector::from_vec(vec![3i8, 4])?;
    /// assert_eq!(v.l2_norm(), 5.0);
    ///
    /// // 100² + 100² would overflow an `i8` (or even an `i16` accumulator), but not an `f64`.
    /// let big = Vector::from_vec(vec![100i8; 2])?;
    /// assert_eq!(big.l2_norm(), 20000f64.sqrt());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn l2_norm(&self) -> f64 {
        self.0
            .iter()
            .map(|&elem| {
                let wide = elem.widen();
                wide * wide
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Returns the infinity norm (the largest absolute value of any element).
    pub fn infinity_norm(&self) -> T {
        self.0
            .iter()
            .fold(T::ZERO, |acc, &elem| acc.max(elem.abs()))
    }

    /// Computes the norm of the given order.
    ///
    /// Also see [`crate::norm`], which takes the order as a number.
    pub fn norm(&self, order: NormOrder) -> f64 {
        match order {
            NormOrder::Infinity => self.infinity_norm().widen(),
            NormOrder::L1 => self.l1_norm().widen(),
            NormOrder::L2 => self.l2_norm(),
        }
    }
}

impl<T> Vector<T>
where
    T: std::ops::Neg<Output = T> + Copy,
{
    /// Flips the sign of every element, returning a new vector.
    pub fn negate(&self) -> Self {
        self.map(T::neg)
    }
}

fn out_of_bounds(index: usize, len: usize) -> Error {
    Error::out_of_bounds(format!(
        "Vector::at: index {index} is out of bounds for length {len}"
    ))
}

fn check_divisor<T: Scalar>(divisor: T, what: &str) -> Result<()> {
    if divisor == T::ZERO {
        return Err(Error::divide_by_zero(format!("{what}: divisor is zero")));
    }
    Ok(())
}

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = Error;

    #[inline]
    fn try_from(value: Vec<T>) -> Result<Self> {
        Self::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.0
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T> fmt::Debug for Vector<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T> fmt::Display for Vector<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}
