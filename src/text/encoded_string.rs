//! Encoding-aware string type.

use std::borrow::Cow;
use std::ffi::{c_char, CStr};
use std::fmt::{self, Write};

use crate::common::{ByteView, RangeError, TextConvertible};

use super::codec::{decode_utf8, encode_utf8, ConversionError};

/// A string held as unicode code units, convertible to and from the
/// character encodings used by the server.
///
/// Only UTF-8 is supported. Input is decoded eagerly when the string is
/// built, and malformed input is rejected with [`ConversionError`].
/// Going back to UTF-8 is always explicit ([`to_utf8`](Self::to_utf8),
/// [`to_utf8_bytes`](Self::to_utf8_bytes)) since it re-encodes the whole
/// string. `Display` writes the UTF-8 form.
///
/// For valid input, decoding then encoding reproduces the original bytes
/// exactly.
///
/// # Example
/// ```
/// use xdevapi_core::EncodedString;
///
/// let s = EncodedString::from_utf8("zażółć".as_bytes()).unwrap();
/// assert_eq!(s.len(), 6);
/// assert_eq!(s.to_utf8(), "zażółć");
///
/// assert!(EncodedString::from_utf8(b"\xff").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedString {
    units: Vec<char>,
}

impl EncodedString {
    /// Create an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a UTF-8 byte sequence.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, ConversionError> {
        Ok(Self {
            units: decode_utf8(bytes)?,
        })
    }

    /// Decode the bytes described by a view.
    pub fn from_byte_view(view: ByteView<'_>) -> Result<Self, ConversionError> {
        Self::from_utf8(view.as_slice())
    }

    /// Decode a C string (terminator excluded).
    pub fn from_c_str(s: &CStr) -> Result<Self, ConversionError> {
        Self::from_utf8(s.to_bytes())
    }

    /// Decode a NUL-terminated UTF-8 string. A null pointer gives the empty
    /// string.
    ///
    /// # Safety
    /// Same as [`ByteView::from_c_str_ptr`].
    pub unsafe fn from_c_str_ptr(ptr: *const c_char) -> Result<Self, ConversionError> {
        Self::from_byte_view(ByteView::from_c_str_ptr(ptr))
    }

    /// Wrap code units that are already decoded.
    pub fn from_code_units(units: Vec<char>) -> Self {
        Self { units }
    }

    /// Replace the contents, keeping the allocation where possible.
    pub fn assign(&mut self, other: &EncodedString) {
        self.units.clone_from(&other.units);
    }

    /// Encode as UTF-8.
    pub fn to_utf8(&self) -> String {
        encode_utf8(&self.units)
    }

    /// Encode as UTF-8 bytes.
    pub fn to_utf8_bytes(&self) -> Vec<u8> {
        self.to_utf8().into_bytes()
    }

    /// The decoded code units.
    #[inline]
    pub fn code_units(&self) -> &[char] {
        &self.units
    }

    /// Code unit at `index`.
    pub fn code_unit_at(&self, index: usize) -> Result<char, RangeError> {
        self.units.get(index).copied().ok_or(RangeError {
            index,
            len: self.units.len(),
        })
    }

    /// Number of code units (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl From<&str> for EncodedString {
    fn from(s: &str) -> Self {
        Self {
            units: s.chars().collect(),
        }
    }
}

impl From<String> for EncodedString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Vec<char>> for EncodedString {
    fn from(units: Vec<char>) -> Self {
        Self::from_code_units(units)
    }
}

impl FromIterator<char> for EncodedString {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&[u8]> for EncodedString {
    type Error = ConversionError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_utf8(bytes)
    }
}

impl TryFrom<ByteView<'_>> for EncodedString {
    type Error = ConversionError;

    fn try_from(view: ByteView<'_>) -> Result<Self, Self::Error> {
        Self::from_byte_view(view)
    }
}

impl TextConvertible for EncodedString {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_utf8())
    }
}

impl fmt::Display for EncodedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.units {
            f.write_char(c)?;
        }
        Ok(())
    }
}
