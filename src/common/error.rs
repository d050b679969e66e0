//! Error types for xdevapi-core.

use thiserror::Error as ThisError;

use super::config::{ThrowMode, THROW_MODE};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The single error kind visible to users of the client library.
///
/// Every failure that crosses the library boundary (see
/// [`catch_and_wrap`](crate::catch_and_wrap)) is reported as an `Error`
/// carrying nothing but a human-readable message. Whatever type the
/// original failure had is not preserved.
///
/// # Example
/// ```
/// use xdevapi_core::Error;
///
/// let err = Error::new("connection refused");
/// assert_eq!(err.message(), "connection refused");
/// assert_eq!(err.to_string(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, ThisError)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message this error was constructed with.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Out-of-bounds index access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("index {index} out of range for length {len}")]
pub struct RangeError {
    pub index: usize,
    pub len: usize,
}

/// Raise `message` as an [`Error`].
///
/// Always returns `Err`, so it fits any `Result<T>` position:
///
/// ```
/// use xdevapi_core::{throw_error, Result};
///
/// fn column(idx: u64) -> Result<&'static str> {
///     match idx {
///         0 => Ok("_id"),
///         _ => throw_error("no such column"),
///     }
/// }
///
/// assert_eq!(column(0).unwrap(), "_id");
/// ```
///
/// With the `throw-as-assert` feature a debug build asserts first, so the
/// failure surfaces at the call site during development.
pub fn throw_error<T>(message: &str) -> Result<T> {
    tracing::error!(error = message, "raising error");
    if THROW_MODE == ThrowMode::AssertThenRaise {
        debug_assert!(false, "{}", message);
    }
    Err(Error::new(message))
}
