//! Text handling.
//!
//! - [`EncodedString`] - String of unicode code units with explicit UTF-8 conversion
//! - [`codec`] - Strict UTF-8 decoder/encoder behind it

pub mod codec;
mod encoded_string;

pub use codec::ConversionError;
pub use encoded_string::EncodedString;
