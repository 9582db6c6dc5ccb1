//! Fallback Combinator
//!
//! Collapses a live result into a value by substituting a locally computed
//! stand-in on failure, so callers never have to surface an error.

use std::fmt::Display;

/// Turn `Result<T, E>` into `T`, degrading to a mock on any error.
///
/// ```rust
/// use yatra::Degrade;
///
/// let live: Result<u8, String> = Err("backend offline".to_string());
/// assert_eq!(live.or_mock(|| 45), 45);
/// ```
pub trait Degrade<T> {
    /// Return the success value, or the result of `mock` if this is an error.
    /// The error is logged at `info` and otherwise discarded; demo mode is
    /// an expected state, not a fault.
    fn or_mock<F>(self, mock: F) -> T
    where
        F: FnOnce() -> T;
}

impl<T, E: Display> Degrade<T> for Result<T, E> {
    fn or_mock<F>(self, mock: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::info!("Live call failed, using demo mode: {}", err);
                mock()
            }
        }
    }
}
