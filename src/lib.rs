//! xdevapi-core - value types underneath a document database client.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Client API (not here)                       │
//! │      Sessions → Collections → Statements → Result decoding      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               ↓ uses
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          xdevapi-core                           │
//! │  ┌─────────────┐   ┌────────────────┐   ┌──────────────────┐   │
//! │  │  ByteView   │ → │ EncodedString  │   │       Guid       │   │
//! │  │ (ptr, len)  │   │ UTF-8 ⇄ chars  │   │  32-byte doc id  │   │
//! │  └─────────────┘   └────────────────┘   └──────────────────┘   │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │     boundary: catch_and_wrap → Error { message }        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (ByteView, Guid, Error, config, numeric aliases)
//! - [`text`] - EncodedString and its UTF-8 codec
//! - [`boundary`] - Translation of internal failures into [`Error`]
//!
//! # Quick Start
//! ```
//! use xdevapi_core::{catch_and_wrap, ByteView, EncodedString, Guid};
//!
//! let raw = "dokument".as_bytes();
//! let view = ByteView::new(raw);
//!
//! let name = catch_and_wrap(|| EncodedString::from_byte_view(view)).unwrap();
//! assert_eq!(name.to_utf8(), "dokument");
//!
//! let id = Guid::generated();
//! assert_eq!(id.to_string().len(), 32);
//! ```
//!
//! # Thread Safety
//! All types are plain values with no internal locking. Sharing one
//! instance across threads needs external synchronization; the only
//! operation designed for concurrent use is [`Guid::generate`].

pub mod boundary;
pub mod common;
pub mod text;

// Re-export commonly used items at crate root for convenience
pub use boundary::{catch_and_wrap, Failure};
pub use common::{
    throw_error, Byte, ByteView, ColCount, Error, Guid, RangeError, Result, RowCount,
    TextConvertible,
};
pub use text::{ConversionError, EncodedString};
