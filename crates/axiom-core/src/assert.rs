//! Internal invariant checks.

use std::{fmt, panic::Location};

/// Whether [`axiom_assert!`][crate::axiom_assert] checks its condition.
///
/// Enabled in builds with `debug_assertions`, and in every build when the `assertions` feature is
/// active.
pub const ASSERTIONS_ENABLED: bool = cfg!(any(debug_assertions, feature = "assertions"));

/// Asserts that an internal invariant holds.
///
/// Unlike [`assert!`], the check is compiled out of release builds unless the `assertions` feature
/// is enabled. Use it on hot paths (like unchecked indexing) where a violated invariant indicates
/// a bug in the caller, not a recoverable condition. Recoverable conditions are reported through
/// [`Error`][crate::Error] instead.
///
/// The failure is logged at `error` level before panicking.
///
/// # Examples
///
/// ```should_panic
/// # use axiom_core::axiom_assert;
/// let cols = 0;
/// axiom_assert!(cols != 0, "cols must be non-zero");
/// ```
#[macro_export]
macro_rules! axiom_assert {
    ($cond:expr, $($arg:tt)+) => {
        if $crate::assert::ASSERTIONS_ENABLED && !$cond {
            $crate::assert::assertion_failed(
                ::core::stringify!($cond),
                ::core::format_args!($($arg)+),
            );
        }
    };
}

#[doc(hidden)]
#[cold]
#[track_caller]
pub fn assertion_failed(cond: &str, msg: fmt::Arguments<'_>) -> ! {
    let location = Location::caller();
    log::error!("axiom assertion failed at {location}: {msg} (condition: `{cond}`)");
    panic!("axiom assertion failed: {msg}\n  condition: `{cond}`\n  at: {location}");
}

#[cfg(test)]
mod tests {
    #[test]
    fn passing_assertion() {
        let n = 3;
        axiom_assert!(n > 0, "n must be positive");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "n must be positive, got 0")]
    fn failing_assertion() {
        let n = 0;
        axiom_assert!(n > 0, "n must be positive, got {n}");
    }
}
