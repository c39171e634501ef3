//! Error types for options writes.

use thiserror::Error;

/// Errors raised when writing to [`ValidatorOptions`](crate::ValidatorOptions).
///
/// Only the language manager can fail: every other slot has a built-in to fall
/// back on, so clearing it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A required value was absent.
    #[error("value cannot be absent (parameter '{parameter}')")]
    InvalidArgument {
        /// Name of the rejected parameter.
        parameter: &'static str,
    },
}

pub type Result<T, E = OptionsError> = std::result::Result<T, E>;
