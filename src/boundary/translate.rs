//! The try/map-error combinator used at every public entry point.

use std::panic::{self, AssertUnwindSafe};

use crate::common::{Error, Result};

use super::failure::Failure;

/// Run `work` and report any failure as the library's [`Error`].
///
/// Failures are resolved in this order:
/// 1. an [`Error`] passes through unchanged;
/// 2. a runtime error (`std::error::Error`) is reduced to its message;
/// 3. bare text (`String` / `&str`) becomes the message;
/// 4. anything else becomes `"Unknown exception"`.
///
/// Failures are both the `Err` returned by `work` and panics unwinding out
/// of it. Panic payloads are classified the same way, so `panic!("oops")`
/// surfaces as `"oops"`. Panics cannot be caught in builds with
/// `panic = "abort"`.
///
/// The original failure's type is discarded; callers only ever see a
/// message.
///
/// # Example
/// ```
/// use xdevapi_core::{catch_and_wrap, EncodedString};
///
/// let err = catch_and_wrap(|| EncodedString::from_utf8(b"\xc3")).unwrap_err();
/// assert_eq!(err.message(), "incomplete utf-8 sequence at offset 0");
///
/// let err = catch_and_wrap(|| -> Result<(), &str> { Err("oops") }).unwrap_err();
/// assert_eq!(err.message(), "oops");
/// ```
pub fn catch_and_wrap<T, E, F>(work: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: Into<Failure>,
{
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(translate(err.into())),
        Err(payload) => Err(translate(Failure::from_panic(payload))),
    }
}

/// Reduce a failure to the library's [`Error`], logging what was lost.
pub fn translate(failure: Failure) -> Error {
    match &failure {
        Failure::Library(_) => {}
        Failure::Unknown(_) => {
            tracing::warn!("failure without message reported as unknown exception");
        }
        other => {
            tracing::debug!(kind = other.kind(), "wrapping failure into library error");
        }
    }
    failure.into_error()
}
