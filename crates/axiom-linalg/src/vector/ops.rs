//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use axiom_core::{Result, Scalar};

use super::Vector;

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.0.as_slice() == *other
    }
}

/// Element-wise negation.
impl<T> Neg for Vector<T>
where
    T: Neg<Output = T>,
{
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        Vector(self.0.into_iter().map(T::neg).collect())
    }
}

/// Element-wise negation.
impl<T> Neg for &Vector<T>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Element-wise addition.
///
/// Evaluates to an error if the lengths differ. See [`Vector::add`].
impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn add(self, rhs: &Vector<T>) -> Self::Output {
        Vector::add(self, rhs)
    }
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the lengths differ. Use [`Vector::add_in_place`] to handle this case.
impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.add_in_place(rhs) {
            panic!("{e}");
        }
    }
}

/// Element-wise subtraction.
///
/// Evaluates to an error if the lengths differ. See [`Vector::subtract`].
impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: &Vector<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the lengths differ. Use [`Vector::subtract_in_place`] to handle this case.
impl<T: Scalar> SubAssign<&Vector<T>> for Vector<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.subtract_in_place(rhs) {
            panic!("{e}");
        }
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, rhs: T) -> Self::Output {
        self.scale_in_place(rhs);
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale_in_place(rhs);
    }
}

/// Vector-Scalar division.
///
/// Evaluates to an error if `rhs` is zero. See [`Vector::divide`].
impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn div(self, rhs: T) -> Self::Output {
        self.divide(rhs)
    }
}

/// Vector-Scalar division.
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`Vector::divide_in_place`] to handle this case.
impl<T: Scalar> DivAssign<T> for Vector<T> {
    #[track_caller]
    fn div_assign(&mut self, rhs: T) {
        if let Err(e) = self.divide_in_place(rhs) {
            panic!("{e}");
        }
    }
}

// Scalar-Vector multiplication can't be implemented generically (the scalar type would be an
// uncovered type parameter), so it is provided for the primitive types only.
macro_rules! scalar_mul {
    ($($types:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl Mul<Vector<$types>> for $types {
                type Output = Vector<$types>;

                fn mul(self, rhs: Vector<$types>) -> Self::Output {
                    rhs * self
                }
            }

            /// Scalar-Vector multiplication (scaling).
            impl Mul<&Vector<$types>> for $types {
                type Output = Vector<$types>;

                fn mul(self, rhs: &Vector<$types>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )+
    };
}
scalar_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::ErrorKind;

    use super::*;

    fn vector<T>(data: impl Into<Vec<T>>) -> Vector<T> {
        Vector::from_vec(data.into()).unwrap()
    }

    #[test]
    fn operators() {
        let a = vector([1.0, 2.0, 3.0]);
        let b = vector([0.5, 0.5, 0.5]);

        assert_eq!((&a + &b).unwrap(), [1.5, 2.5, 3.5]);
        assert_eq!((&a - &b).unwrap(), [0.5, 1.5, 2.5]);
        assert_eq!(&a * 2.0, [2.0, 4.0, 6.0]);
        assert_eq!(2.0 * &a, [2.0, 4.0, 6.0]);
        assert_eq!(a.clone() * 2.0, 2.0 * a.clone());
        assert_eq!((&a / 2.0).unwrap(), [0.5, 1.0, 1.5]);
        assert_eq!(-&a, [-1.0, -2.0, -3.0]);
        assert_eq!(-a.clone(), [-1.0, -2.0, -3.0]);

        // Operators never touch borrowed operands.
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_eq!(b, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn operator_errors() {
        let a = vector([1, 2, 3]);
        let b = vector([1, 2]);
        assert_eq!((&a + &b).unwrap_err().kind(), ErrorKind::ShapeMismatch);
        assert_eq!((&a - &b).unwrap_err().kind(), ErrorKind::ShapeMismatch);
        assert_eq!((&a / 0).unwrap_err().kind(), ErrorKind::DivideByZero);
    }

    #[test]
    fn compound_assignment() {
        let mut v = vector([1, 2, 3]);
        v += &vector([1, 1, 1]);
        assert_eq!(v, [2, 3, 4]);
        v -= &vector([2, 2, 2]);
        assert_eq!(v, [0, 1, 2]);
        v *= 3;
        assert_eq!(v, [0, 3, 6]);
        v /= 3;
        assert_eq!(v, [0, 1, 2]);
    }

    #[test]
    fn compound_assignment_chain() {
        let mut acc = Vector::<f64>::zeros(2).unwrap();
        let step = vector([0.25, 0.5]);
        for _ in 0..4 {
            acc += &step;
        }
        assert_eq!(acc, [1.0, 2.0]);
        assert_eq!(step, [0.25, 0.5]);
    }

    #[test]
    #[should_panic(expected = "vectors must have the same length (3 vs 2)")]
    fn add_assign_mismatch() {
        let mut v = vector([1, 2, 3]);
        v += &vector([1, 2]);
    }

    #[test]
    #[should_panic(expected = "divisor is zero")]
    fn div_assign_zero() {
        let mut v = vector([1.0, 2.0]);
        v /= 0.0;
    }

    #[test]
    fn slice_eq() {
        let v = vector([1, 2]);
        assert!(v == [1, 2]);
        assert!(v == *[1, 2].as_slice());
        assert!(v == [1, 2].as_slice());
        assert!(v != [1, 2, 3]);
    }
}
