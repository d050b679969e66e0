//! Failure signals accepted at the library boundary.

use std::any::Any;
use std::fmt;

use crate::common::config::UNKNOWN_EXCEPTION;
use crate::common::{Error, RangeError};
use crate::text::ConversionError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Any failure a unit of work can raise before it reaches the caller.
///
/// The variants are listed in the order [`into_error`](Self::into_error)
/// resolves them.
pub enum Failure {
    /// Already the library's own error; passes through unchanged.
    Library(Error),
    /// A runtime error carrying a message.
    Runtime(BoxError),
    /// Bare text.
    Text(String),
    /// Anything else. Nothing about it can be reported.
    Unknown(Box<dyn Any + Send + 'static>),
}

impl Failure {
    /// Wrap a runtime error, recognizing the library's own [`Error`].
    pub fn runtime<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from(Box::new(err) as BoxError)
    }

    /// Classify a panic payload as caught by [`std::panic::catch_unwind`].
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(err) => return Failure::Library(*err),
            Err(other) => other,
        };
        let payload = match payload.downcast::<Failure>() {
            Ok(failure) => return *failure,
            Err(other) => other,
        };
        let payload = match payload.downcast::<BoxError>() {
            Ok(err) => return Failure::from(*err),
            Err(other) => other,
        };
        let payload = match payload.downcast::<String>() {
            Ok(text) => return Failure::Text(*text),
            Err(other) => other,
        };
        match payload.downcast::<&'static str>() {
            Ok(text) => Failure::Text((*text).to_owned()),
            Err(other) => Failure::Unknown(other),
        }
    }

    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Library(_) => "library",
            Failure::Runtime(_) => "runtime",
            Failure::Text(_) => "text",
            Failure::Unknown(_) => "unknown",
        }
    }

    /// Reduce to the library's error kind.
    ///
    /// Only the message survives. An [`Unknown`](Failure::Unknown) failure
    /// becomes `"Unknown exception"`.
    pub fn into_error(self) -> Error {
        match self {
            Failure::Library(err) => err,
            Failure::Runtime(err) => Error::new(err.to_string()),
            Failure::Text(text) => Error::new(text),
            Failure::Unknown(_) => Error::new(UNKNOWN_EXCEPTION),
        }
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Library(err) => f.debug_tuple("Library").field(err).finish(),
            Failure::Runtime(err) => f.debug_tuple("Runtime").field(err).finish(),
            Failure::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Failure::Unknown(_) => f.write_str("Unknown(..)"),
        }
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::Library(err)
    }
}

impl From<BoxError> for Failure {
    fn from(err: BoxError) -> Self {
        match err.downcast::<Error>() {
            Ok(err) => Failure::Library(*err),
            Err(other) => Failure::Runtime(other),
        }
    }
}

impl From<ConversionError> for Failure {
    fn from(err: ConversionError) -> Self {
        Failure::Runtime(Box::new(err))
    }
}

impl From<RangeError> for Failure {
    fn from(err: RangeError) -> Self {
        Failure::Runtime(Box::new(err))
    }
}

impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        Failure::Runtime(Box::new(err))
    }
}

impl From<String> for Failure {
    fn from(text: String) -> Self {
        Failure::Text(text)
    }
}

impl From<&str> for Failure {
    fn from(text: &str) -> Self {
        Failure::Text(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_error_is_kept() {
        let failure = Failure::from(Error::new("mine"));
        assert_eq!(failure.kind(), "library");
        assert_eq!(failure.into_error(), Error::new("mine"));
    }

    #[test]
    fn test_runtime_recognizes_library_error() {
        let failure = Failure::runtime(Error::new("mine"));
        assert_eq!(failure.kind(), "library");
    }

    #[test]
    fn test_runtime_error_keeps_message() {
        let io = std::io::Error::other("boom");
        let failure = Failure::from(io);
        assert_eq!(failure.kind(), "runtime");
        assert_eq!(failure.into_error().message(), "boom");
    }

    #[test]
    fn test_panic_payload_classification() {
        assert_eq!(Failure::from_panic(Box::new("oops")).kind(), "text");
        assert_eq!(Failure::from_panic(Box::new(String::from("oops"))).kind(), "text");
        assert_eq!(Failure::from_panic(Box::new(Error::new("x"))).kind(), "library");
        assert_eq!(Failure::from_panic(Box::new(42u32)).kind(), "unknown");
        assert_eq!(
            Failure::from_panic(Box::new(Failure::Text("t".into()))).kind(),
            "text"
        );
    }

    #[test]
    fn test_unknown_becomes_fixed_message() {
        let failure = Failure::Unknown(Box::new(()));
        assert_eq!(failure.into_error().message(), "Unknown exception");
    }

    #[test]
    fn test_conversion_error_message() {
        let failure = Failure::from(ConversionError::Incomplete { offset: 5 });
        assert_eq!(
            failure.into_error().message(),
            "incomplete utf-8 sequence at offset 5"
        );
    }
}
