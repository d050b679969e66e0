//! UTF-8 codec between raw bytes and unicode code units.
//!
//! Decoding is strict: malformed input is rejected with a
//! [`ConversionError`], never patched up with replacement characters.

use thiserror::Error as ThisError;

/// Malformed UTF-8 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ConversionError {
    /// An invalid byte sequence starts at `offset`.
    #[error("invalid utf-8 sequence of {len} bytes at offset {offset}")]
    InvalidSequence { offset: usize, len: usize },

    /// Input ends in the middle of a multi-byte sequence starting at `offset`.
    #[error("incomplete utf-8 sequence at offset {offset}")]
    Incomplete { offset: usize },
}

impl ConversionError {
    /// Offset of the first byte that could not be decoded.
    pub fn offset(&self) -> usize {
        match *self {
            ConversionError::InvalidSequence { offset, .. } => offset,
            ConversionError::Incomplete { offset } => offset,
        }
    }
}

impl From<std::str::Utf8Error> for ConversionError {
    fn from(err: std::str::Utf8Error) -> Self {
        let offset = err.valid_up_to();
        match err.error_len() {
            Some(len) => ConversionError::InvalidSequence { offset, len },
            None => ConversionError::Incomplete { offset },
        }
    }
}

/// Decode UTF-8 bytes into code units.
pub fn decode_utf8(bytes: &[u8]) -> Result<Vec<char>, ConversionError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.chars().collect())
}

/// Encode code units as UTF-8.
pub fn encode_utf8(units: &[char]) -> String {
    let capacity = units.iter().map(|c| c.len_utf8()).sum();
    let mut out = String::with_capacity(capacity);
    out.extend(units);
    out
}
