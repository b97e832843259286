use std::fmt;

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed construction parameters (zero dimension, empty source data, invalid norm order).
    InvalidArgument,
    /// Operand sizes or dimensions are incompatible.
    ShapeMismatch,
    /// Checked element access beyond the container's addressable range.
    OutOfBounds,
    /// Division, normalization or projection by an exact zero.
    DivideByZero,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::ShapeMismatch => "shape mismatch",
            ErrorKind::OutOfBounds => "out of bounds",
            ErrorKind::DivideByZero => "divide by zero",
        })
    }
}

/// Error returned by every fallible vector and matrix operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("axiom: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        log::trace!("{kind}: {message}");
        Self { kind, message }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ShapeMismatch, message)
    }

    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfBounds, message)
    }

    pub fn divide_by_zero(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DivideByZero, message)
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message describing the failure, without the `axiom:` prefix.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::shape_mismatch("dot: lengths differ (2 vs 3)");
        assert_eq!(err.to_string(), "axiom: dot: lengths differ (2 vs 3)");
        assert_eq!(err.message(), "dot: lengths differ (2 vs 3)");
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::invalid_argument("").kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::out_of_bounds("").kind(), ErrorKind::OutOfBounds);
        assert_eq!(Error::divide_by_zero("").kind(), ErrorKind::DivideByZero);
        assert_eq!(ErrorKind::DivideByZero.to_string(), "divide by zero");
    }
}
