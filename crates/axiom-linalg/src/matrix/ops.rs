//! Implementations of `std::ops`.

use std::ops::{Index, IndexMut};

use axiom_core::axiom_assert;

use super::Matrix;

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        axiom_assert!(
            col < self.cols,
            "column index {col} out of bounds for {} columns",
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        axiom_assert!(
            col < self.cols,
            "column index {col} out of bounds for {} columns",
            self.cols
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T, U> PartialEq<[U]> for Matrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.data.as_slice() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index() {
        let mut m = Matrix::from_vec(vec![0, 1, 2, 3, 4, 5], 3).unwrap();
        assert_eq!(m[(0, 2)], 2);
        assert_eq!(m[(1, 0)], 3);

        m[(1, 1)] = 10;
        assert_eq!(m.as_slice(), &[0, 1, 2, 3, 10, 5]);
        assert!(m == *[0, 1, 2, 3, 10, 5].as_slice());
    }

    #[test]
    #[should_panic]
    fn index_past_end() {
        let m = Matrix::<f32>::zeros(2, 2).unwrap();
        let _elem = m[(2, 0)];
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "column index 2 out of bounds")]
    fn index_column_overflow() {
        // (0, 2) would land on (1, 0) without the column check.
        let m = Matrix::<f32>::zeros(2, 2).unwrap();
        let _elem = m[(0, 2)];
    }
}
