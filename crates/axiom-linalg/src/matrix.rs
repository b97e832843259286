use std::{fmt, slice};

use axiom_core::{axiom_assert, Error, One, Result, Zero};

mod ops;

/// A dense, heap-allocated, row-major matrix storing elements of type `T`.
///
/// The elements are stored in a single contiguous buffer, one row after another: element
/// `(row, col)` lives at offset `row * cols + col`. Only the column count is stored; the row count
/// is derived from the buffer length.
///
/// A [`Matrix`] always has at least one row and one column.
///
/// # Construction
///
/// - [`Matrix::from_vec`] takes ownership of a row-major buffer and a column count.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::zeros`], [`Matrix::ones`] and [`Matrix::identity`] create commonly used matrices.
///   [`Matrix::new`] is an alias for [`Matrix::zeros`].
/// - The `_square` variants ([`Matrix::new_square`], [`Matrix::zeros_square`],
///   [`Matrix::ones_square`]) take a single dimension.
///
/// All constructors fail with [`ErrorKind::InvalidArgument`] if the matrix would be empty or its
/// element count would overflow [`usize`].
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use axiom_linalg::*;
/// let mut mat = Matrix::from_vec(vec![0, 1], 2)?;
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// # Ok::<(), Error>(())
/// ```
///
/// Indexing only computes the linear offset, so a column index past the end of a row addresses an
/// element of the following row (this is caught by an [`axiom_assert!`] in debug builds). Indexing
/// past the end of the buffer panics, like it does for slices. [`Matrix::at`] and
/// [`Matrix::at_mut`] check the row and the column separately and return
/// [`ErrorKind::OutOfBounds`] instead:
///
/// ```
/// # use axiom_linalg::*;
/// let mat = Matrix::from_vec(vec![0, 1, 2, 3, 4, 5], 3)?;
/// assert_eq!(mat.at(1, 2)?, &5);
/// assert_eq!(mat.at(0, 3).unwrap_err().kind(), ErrorKind::OutOfBounds);
/// assert_eq!(mat.at(2, 0).unwrap_err().kind(), ErrorKind::OutOfBounds);
/// # Ok::<(), Error>(())
/// ```
///
/// [`ErrorKind::InvalidArgument`]: crate::ErrorKind::InvalidArgument
/// [`ErrorKind::OutOfBounds`]: crate::ErrorKind::OutOfBounds
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`axiom_assert!`]: axiom_core::axiom_assert
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    data: Vec<T>,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a [`Matrix`] from a row-major buffer and a column count.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `cols` is 0 or
    ///   `data` is empty.
    /// - [`ErrorKind::ShapeMismatch`][crate::ErrorKind::ShapeMismatch] if the length of `data` is
    ///   not a multiple of `cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let mat = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 3)?;
    /// assert_eq!(mat.shape(), (2, 3));
    /// assert_eq!(mat[(1, 2)], 6);
    ///
    /// let err = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 4).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_vec(data: Vec<T>, cols: usize) -> Result<Self> {
        if cols == 0 {
            return Err(Error::invalid_argument(
                "Matrix::from_vec: cols must be >= 1",
            ));
        }
        if data.is_empty() {
            return Err(Error::invalid_argument(
                "Matrix::from_vec: data must be non-empty",
            ));
        }
        if data.len() % cols != 0 {
            return Err(Error::shape_mismatch(format!(
                "Matrix::from_vec: data length {} is not a multiple of cols ({cols})",
                data.len()
            )));
        }
        Ok(Self { data, cols })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `rows` or
    /// `cols` is 0, or if `rows * cols` overflows [`usize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let mat = Matrix::from_fn(2, 3, |row, col| row * 10 + col)?;
    /// assert_eq!(mat.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::generate(rows, cols, "from_fn", cb)
    }

    fn generate<F>(rows: usize, cols: usize, what: &str, mut cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = validate_dims(rows, cols, what)?;
        let mut data = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                data.push(cb(row, col));
            }
        }
        Ok(Self { data, cols })
    }

    fn filled(rows: usize, cols: usize, value: T, what: &str) -> Result<Self>
    where
        T: Clone,
    {
        let len = validate_dims(rows, cols, what)?;
        Ok(Self {
            data: vec![value; len],
            cols,
        })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        axiom_assert!(self.cols != 0, "Matrix column count must be non-zero");
        self.data.len() / self.cols
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the dimensions as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    /// Returns the total number of elements (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false`; a [`Matrix`] cannot be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the elements of row `row` as a slice.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfBounds`][crate::ErrorKind::OutOfBounds] if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows() {
            return Err(Error::out_of_bounds(format!(
                "Matrix::row: row {row} is out of bounds for {} rows",
                self.rows()
            )));
        }
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfBounds`][crate::ErrorKind::OutOfBounds] if `row >= self.rows()`
    /// or `col >= self.cols()`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_index(row, col)?;
        Ok(&self.data[self.offset(row, col)])
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfBounds`][crate::ErrorKind::OutOfBounds] if `row >= self.rows()`
    /// or `col >= self.cols()`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_index(row, col)?;
        let offset = self.offset(row, col);
        Ok(&mut self.data[offset])
    }

    /// Applies a closure to each element, returning a new matrix of the same shape.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        T: Copy,
        F: FnMut(T) -> U,
    {
        Matrix {
            data: self.data.iter().copied().map(f).collect(),
            cols: self.cols,
        }
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return Err(Error::out_of_bounds(format!(
                "Matrix::at: index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix"
            )));
        }
        Ok(())
    }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Creates a `rows` x `cols` matrix with every element set to [`T::ZERO`][Zero::ZERO].
    ///
    /// Equivalent to [`Matrix::zeros`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `rows` or
    /// `cols` is 0, or if `rows * cols` overflows [`usize`].
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::ZERO, "new")
    }

    /// Creates an `n` x `n` matrix with every element set to [`T::ZERO`][Zero::ZERO].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `n` is 0
    /// or `n * n` overflows [`usize`].
    pub fn new_square(n: usize) -> Result<Self> {
        Self::filled(n, n, T::ZERO, "new_square")
    }

    /// Creates a `rows` x `cols` matrix with every element set to [`T::ZERO`][Zero::ZERO].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `rows` or
    /// `cols` is 0, or if `rows * cols` overflows [`usize`].
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::ZERO, "zeros")
    }

    /// Creates an `n` x `n` matrix with every element set to [`T::ZERO`][Zero::ZERO].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `n` is 0
    /// or `n * n` overflows [`usize`].
    pub fn zeros_square(n: usize) -> Result<Self> {
        Self::filled(n, n, T::ZERO, "zeros_square")
    }
}

impl<T: One + Clone> Matrix<T> {
    /// Creates a `rows` x `cols` matrix with every element set to [`T::ONE`][One::ONE].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `rows` or
    /// `cols` is 0, or if `rows * cols` overflows [`usize`].
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::ONE, "ones")
    }

    /// Creates an `n` x `n` matrix with every element set to [`T::ONE`][One::ONE].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `n` is 0
    /// or `n * n` overflows [`usize`].
    pub fn ones_square(n: usize) -> Result<Self> {
        Self::filled(n, n, T::ONE, "ones_square")
    }
}

impl<T: Zero + One> Matrix<T> {
    /// Creates the `n` x `n` identity matrix, with 1 on its diagonal and 0 everywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`][crate::ErrorKind::InvalidArgument] if `n` is 0
    /// or `n * n` overflows [`usize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use axiom_linalg::*;
    /// let id = Matrix::<i32>::identity(2)?;
    /// assert_eq!(id.as_slice(), &[
    ///     1, 0,
    ///     0, 1,
    /// ]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        Self::generate(n, n, "identity", |row, col| {
            if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }
}

/// Returns the element count of a `rows` x `cols` matrix.
fn validate_dims(rows: usize, cols: usize, what: &str) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::invalid_argument(format!(
            "Matrix::{what}: rows and cols must be >= 1 (got {rows}x{cols})"
        )));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Matrix::{what}: {rows}x{cols} elements overflow usize"
        ))
    })
}

impl<T> fmt::Debug for Matrix<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in self.data.chunks(self.cols) {
            list.entry(&row);
        }
        list.finish()
    }
}

impl<T> fmt::Display for Matrix<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for (j, elem) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(", ")?;
                }
                elem.fmt(f)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
