//! Global unique identifiers for documents.

use std::borrow::Cow;
use std::fmt;

use uuid::Uuid;

use super::config::GUID_LENGTH;

/// A value that can be rendered as text.
///
/// This is what a [`Guid`] can be built from. Implemented for the owned and
/// borrowed string types, for [`EncodedString`](crate::EncodedString), and
/// for references to any of them.
pub trait TextConvertible {
    fn to_text(&self) -> Cow<'_, str>;
}

impl TextConvertible for str {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextConvertible for String {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TextConvertible for Cow<'_, str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: TextConvertible + ?Sized> TextConvertible for &T {
    fn to_text(&self) -> Cow<'_, str> {
        (**self).to_text()
    }
}

/// Global unique identifier of a document.
///
/// Holds exactly [`GUID_LENGTH`] (32) bytes. The default value is all zero
/// bytes; [`generate`](Self::generate) fills it with 32 lowercase hex
/// characters of a random (version 4) UUID.
///
/// # Assignment from text
/// [`from_text`](Self::from_text) and [`assign`](Self::assign) copy the
/// source up to its first NUL byte:
/// - a shorter source is zero-padded to 32 bytes;
/// - a longer source is **truncated** to 32 bytes and the rest is lost.
///
/// Truncation never splits a UTF-8 character (the cut moves back to the
/// previous character boundary), so the stored bytes are always valid UTF-8.
///
/// # Example
/// ```
/// use xdevapi_core::Guid;
///
/// let nil = Guid::new();
/// assert_eq!(nil.to_text(), "\0".repeat(32));
///
/// let id = Guid::generated();
/// assert_eq!(id.as_str().len(), 32);
/// assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid {
    data: [u8; GUID_LENGTH],
}

impl Guid {
    /// The all-zero identifier.
    pub const NIL: Guid = Guid {
        data: [0u8; GUID_LENGTH],
    };

    /// Create the all-zero identifier.
    #[inline]
    pub fn new() -> Self {
        Self::NIL
    }

    /// Create a freshly generated identifier.
    pub fn generated() -> Self {
        let mut guid = Self::new();
        guid.generate();
        guid
    }

    /// Create an identifier from any text-convertible value.
    pub fn from_text<T: TextConvertible + ?Sized>(text: &T) -> Self {
        let mut guid = Self::new();
        guid.assign(text);
        guid
    }

    /// Replace the stored value with a newly generated one.
    ///
    /// Each call draws fresh randomness from the OS and keeps no state, so
    /// concurrent callers on different threads need no coordination.
    pub fn generate(&mut self) {
        Uuid::new_v4()
            .simple()
            .encode_lower(&mut self.data);
    }

    /// Replace the stored value with `text`, zero-padded or truncated to
    /// 32 bytes.
    pub fn assign<T: TextConvertible + ?Sized>(&mut self, text: &T) {
        let text = text.to_text();
        let src = match text.find('\0') {
            Some(nul) => &text[..nul],
            None => &text[..],
        };

        let mut len = src.len().min(GUID_LENGTH);
        while !src.is_char_boundary(len) {
            len -= 1;
        }

        self.data = [0u8; GUID_LENGTH];
        self.data[..len].copy_from_slice(&src.as_bytes()[..len]);
    }

    /// The stored bytes, padding included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; GUID_LENGTH] {
        &self.data
    }

    /// The stored value as text, padding included.
    ///
    /// Always 32 bytes long. Callers must not expect a terminator or
    /// trimmed padding.
    pub fn as_str(&self) -> &str {
        // SAFETY: `data` is only ever written by `assign` (whole characters
        // of a `str` followed by NUL padding) and `generate` (ASCII hex).
        unsafe { std::str::from_utf8_unchecked(&self.data) }
    }

    /// Owned copy of [`as_str`](Self::as_str).
    pub fn to_text(&self) -> String {
        self.as_str().to_owned()
    }

    /// Check whether this is the all-zero identifier.
    #[inline]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }
}

impl TextConvertible for Guid {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl From<&str> for Guid {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Guid {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_guid_default_is_zero() {
        let guid = Guid::default();
        assert_eq!(guid.as_bytes(), &[0u8; 32]);
        assert_eq!(guid.to_text(), "\0".repeat(32));
        assert!(guid.is_nil());
    }

    #[test]
    fn test_guid_generate_is_32_hex_chars() {
        let mut guid = Guid::new();
        guid.generate();

        assert!(!guid.is_nil());
        assert_eq!(guid.as_str().len(), 32);
        assert!(guid
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn test_guid_generate_unique() {
        let ids: HashSet<Guid> = (0..10_000).map(|_| Guid::generated()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_guid_short_source_is_padded() {
        let guid = Guid::from("abc");
        assert_eq!(&guid.as_bytes()[..3], b"abc");
        assert!(guid.as_bytes()[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_guid_long_source_is_truncated() {
        let long = "0123456789abcdef0123456789abcdefEXTRA";
        let guid = Guid::from(long.to_string());
        assert_eq!(guid.as_str(), &long[..32]);
    }

    #[test]
    fn test_guid_truncation_keeps_whole_chars() {
        // 31 ASCII bytes followed by a 2-byte character straddling the limit.
        let src = format!("{}é", "a".repeat(31));
        let guid = Guid::from_text(&src);
        assert_eq!(&guid.as_str()[..31], "a".repeat(31));
        assert_eq!(guid.as_bytes()[31], 0);
    }

    #[test]
    fn test_guid_stops_at_nul() {
        let guid = Guid::from("ab\0cd");
        assert_eq!(&guid.as_bytes()[..2], b"ab");
        assert!(guid.as_bytes()[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_guid_assign_clears_previous_value() {
        let mut guid = Guid::generated();
        guid.assign("xyz");
        assert_eq!(guid, Guid::from("xyz"));
    }

    #[test]
    fn test_guid_display() {
        let guid = Guid::from("0123456789abcdef0123456789abcdef");
        assert_eq!(format!("{}", guid), "0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn test_guid_from_guid_text() {
        let a = Guid::generated();
        let b = Guid::from_text(&a);
        assert_eq!(a, b);
    }
}
