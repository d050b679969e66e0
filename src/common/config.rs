//! Configuration constants for xdevapi-core.
//!
//! Everything here is resolved at build time. There are no environment
//! variables and no runtime configuration in this crate.

/// Number of bytes stored in a [`Guid`](crate::Guid).
///
/// Matches the simple (hyphen-less) hex rendering of a 128-bit UUID,
/// which is how document ids are generated.
pub const GUID_LENGTH: usize = 32;

/// Message used when a failure carries nothing we can report.
pub const UNKNOWN_EXCEPTION: &str = "Unknown exception";

/// How [`throw_error`](crate::throw_error) raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowMode {
    /// Return the error directly.
    Raise,
    /// Fire a debug assertion, then return the error.
    ///
    /// In release builds `debug_assert!` compiles away, so this degrades
    /// to [`ThrowMode::Raise`].
    AssertThenRaise,
}

/// Mode selected by the `throw-as-assert` cargo feature.
pub const THROW_MODE: ThrowMode = if cfg!(feature = "throw-as-assert") {
    ThrowMode::AssertThenRaise
} else {
    ThrowMode::Raise
};
