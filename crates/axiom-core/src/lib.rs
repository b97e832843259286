//! Shared foundation of the axiom linear algebra crates.
//!
//! This crate holds everything the containers in `axiom-linalg` build on:
//!
//! - The [`Error`] type, whose [`ErrorKind`] classifies every failure an operation can report.
//! - The scalar capability traits ([`Scalar`], [`Float`] and their building blocks), which
//!   constrain the element types at compile time.
//! - The scalar helpers [`sq`], [`clamp`], [`nearly_equal`] and [`nearly_equal_eps`].
//! - The [`axiom_assert!`] macro for internal invariants.

pub mod assert;
mod error;
mod num;
mod traits;

pub use error::*;
pub use num::*;
pub use traits::*;
