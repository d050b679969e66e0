//! Common types and utilities shared across xdevapi-core.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - [`ByteView`] and [`Guid`]
//! - Numeric aliases used by result sets

mod byte_view;
pub mod config;
pub mod error;
mod guid;

pub use byte_view::ByteView;
pub use error::{throw_error, Error, RangeError, Result};
pub use guid::{Guid, TextConvertible};

/// A raw byte.
pub type Byte = u8;

/// Number of columns in a result set.
pub type ColCount = u64;

/// Number of rows in a result set.
pub type RowCount = u64;
