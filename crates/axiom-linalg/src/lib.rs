//! Dense, heap-allocated vectors and matrices.
//!
//! # Overview
//!
//! This library provides two owning container types:
//!
//! - [`Vector`], a one-dimensional sequence of scalars with element-wise arithmetic and norms.
//! - [`Matrix`], a two-dimensional, row-major grid of scalars with checked construction and
//!   element access.
//!
//! On top of [`Vector`], the [`ops`] module provides free functions for common geometric and
//! statistical operations (dot and cross products, projection, reflection, distances, and
//! component-wise reductions). They are re-exported at the crate root.
//!
//! # Error Handling
//!
//! Every operation that can fail returns a [`Result`] with an [`Error`] describing the failure.
//! Errors are reported before any element is written, so a failed operation never leaves a
//! container partially modified.
//!
//! Both containers additionally implement [`Index`] and [`IndexMut`] for *unchecked* access. These
//! perform no validation beyond what slice indexing does, and are meant for code that has already
//! established that its indices are in range. Use `at` and `at_mut` for checked access.
//!
//! # Goals & Non-Goals
//!
//! - Support every built-in numeric type as the element type, constrained at compile time through
//!   the [`Scalar`] and [`Float`] traits.
//! - Support only a single, row-major, unpadded layout for matrices.
//! - Don't provide solvers, decompositions, or matrix products. Use a full numerical library when
//!   those are needed.
//!
//! [`Index`]: std::ops::Index
//! [`IndexMut`]: std::ops::IndexMut

pub mod ops;

mod matrix;
mod vector;

pub use axiom_core;
pub use axiom_core::{
    Abs, Bounded, Epsilon, Error, ErrorKind, Float, MinMax, One, Result, Scalar, Widen, Zero,
};

pub use matrix::*;
pub use ops::*;
pub use vector::*;
