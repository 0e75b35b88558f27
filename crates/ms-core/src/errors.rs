//! Error types for moonstock.
//!
//! Every fallible operation in the workspace returns [`Result`] with the
//! `thiserror`-derived [`Error`] enum. The formulas are pure, so the only
//! failure is an argument outside the domain of the formula; the
//! `require!` macro defined here is the usual way of producing one.

use thiserror::Error;

/// The top-level error type used throughout moonstock.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument: an unrecognised tag or an out-of-domain input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout moonstock.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Build an [`Error::InvalidArgument`], emitting a `debug` event.
///
/// This is what [`require!`](crate::require) expands to.
pub fn invalid_argument(message: String) -> Error {
    tracing::debug!(%message, "rejected argument");
    Error::InvalidArgument(message)
}

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ms_core::{require, errors::Error};
/// fn strike(k: f64) -> ms_core::errors::Result<f64> {
///     require!(k > 0.0, "strike must be positive, got {k}");
///     Ok(k)
/// }
/// assert!(strike(100.0).is_ok());
/// assert!(matches!(strike(0.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::invalid_argument(format!($($msg)*)));
        }
    };
}
