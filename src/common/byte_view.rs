//! Non-owning view over a region of raw bytes.

use std::ffi::{c_char, CStr};
use std::fmt;
use std::marker::PhantomData;

use super::Byte;

/// Describes a region of memory holding raw bytes.
///
/// A `ByteView` does not store the bytes. It is a `(begin, length)` pair,
/// so copying one is as cheap as copying two words. [`begin`](Self::begin)
/// points at the first byte of the region and [`end`](Self::end) one past
/// the last.
///
/// The lifetime `'a` ties the view to the buffer it describes. Views built
/// from slices or `CStr`s get this for free; the raw-pointer constructors
/// are `unsafe` and leave it to the caller.
///
/// # Invariant
/// `begin` is null only for the empty view (`length == 0`).
///
/// # Equality
/// Two views compare equal when they describe the *same range*: same
/// `begin` and same `length`. Two views over different buffers holding the
/// same bytes are not equal; use [`content_eq`](Self::content_eq) for that.
///
/// # Example
/// ```
/// use xdevapi_core::ByteView;
///
/// let buf = *b"hello";
/// let view = ByteView::new(&buf);
/// assert_eq!(view.length(), 5);
/// assert_eq!(view.begin(), buf.as_ptr());
/// assert_eq!(view.as_slice(), b"hello");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteView<'a> {
    begin: *const Byte,
    length: usize,
    _marker: PhantomData<&'a [Byte]>,
}

// SAFETY: a ByteView is a read-only borrow of `[u8]`, exactly like `&'a [u8]`.
unsafe impl Send for ByteView<'_> {}
unsafe impl Sync for ByteView<'_> {}

impl<'a> ByteView<'a> {
    /// The empty view, with a null `begin`.
    pub const EMPTY: ByteView<'static> = ByteView {
        begin: std::ptr::null(),
        length: 0,
        _marker: PhantomData,
    };

    /// View over a borrowed slice.
    #[inline]
    pub fn new(bytes: &'a [Byte]) -> Self {
        Self {
            begin: bytes.as_ptr(),
            length: bytes.len(),
            _marker: PhantomData,
        }
    }

    /// View over the bytes of a C string, not including the terminator.
    #[inline]
    pub fn from_c_str(s: &'a CStr) -> Self {
        Self::new(s.to_bytes())
    }

    /// View of exactly `len` bytes starting at `ptr`.
    ///
    /// A null `ptr` yields the empty view regardless of `len`.
    ///
    /// # Safety
    /// Unless `ptr` is null, `ptr..ptr + len` must be readable and stay
    /// unmodified for `'a`, with the same rules as
    /// [`std::slice::from_raw_parts`].
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const Byte, len: usize) -> Self {
        if ptr.is_null() {
            return Self::default();
        }
        Self {
            begin: ptr,
            length: len,
            _marker: PhantomData,
        }
    }

    /// View over the half-open range `begin..end`.
    ///
    /// # Safety
    /// `begin` and `end` must be derived from the same allocation with
    /// `end >= begin`, and the range must satisfy the requirements of
    /// [`from_raw_parts`](Self::from_raw_parts).
    #[inline]
    pub unsafe fn from_ptr_range(begin: *const Byte, end: *const Byte) -> Self {
        debug_assert!(end >= begin, "ByteView range end precedes begin");
        let len = end.offset_from(begin) as usize;
        Self::from_raw_parts(begin, len)
    }

    /// View over a NUL-terminated string.
    ///
    /// A null pointer yields the empty view. Otherwise the length is the
    /// distance to the first NUL byte.
    ///
    /// # Safety
    /// Unless null, `ptr` must satisfy the requirements of
    /// [`CStr::from_ptr`] for `'a`.
    #[inline]
    pub unsafe fn from_c_str_ptr(ptr: *const c_char) -> Self {
        if ptr.is_null() {
            return Self::default();
        }
        Self::from_c_str(CStr::from_ptr(ptr))
    }

    /// Address of the first byte.
    #[inline]
    pub fn begin(&self) -> *const Byte {
        self.begin
    }

    /// Address one past the last byte.
    #[inline]
    pub fn end(&self) -> *const Byte {
        self.begin.wrapping_add(self.length)
    }

    /// Number of bytes in the region.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Same as [`length`](Self::length).
    #[inline]
    pub fn size(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The viewed bytes.
    #[inline]
    pub fn as_slice(&self) -> &'a [Byte] {
        if self.begin.is_null() {
            return &[];
        }
        // SAFETY: non-null views come from a slice or from an unsafe
        // constructor whose caller vouched for the range for 'a.
        unsafe { std::slice::from_raw_parts(self.begin, self.length) }
    }

    /// Compare the viewed bytes rather than the ranges.
    pub fn content_eq(&self, other: &ByteView<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Default for ByteView<'_> {
    fn default() -> Self {
        ByteView::EMPTY
    }
}

impl<'a> From<&'a [Byte]> for ByteView<'a> {
    fn from(bytes: &'a [Byte]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [Byte; N]> for ByteView<'a> {
    fn from(bytes: &'a [Byte; N]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for ByteView<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a CStr> for ByteView<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::from_c_str(s)
    }
}

impl<'a> From<&'a Vec<Byte>> for ByteView<'a> {
    fn from(bytes: &'a Vec<Byte>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteView")
            .field("begin", &self.begin)
            .field("length", &self.length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_slice() {
        let buf = [1u8, 2, 3, 4];
        let view = ByteView::new(&buf);
        assert_eq!(view.begin(), buf.as_ptr());
        assert_eq!(view.end(), buf.as_ptr().wrapping_add(4));
        assert_eq!(view.length(), 4);
        assert_eq!(view.size(), 4);
    }

    #[test]
    fn test_view_from_raw_parts() {
        let buf = [0u8; 16];
        let view = unsafe { ByteView::from_raw_parts(buf.as_ptr(), 10) };
        assert_eq!(view.begin(), buf.as_ptr());
        assert_eq!(view.end(), unsafe { buf.as_ptr().add(10) });
        assert_eq!(view.length(), 10);
    }

    #[test]
    fn test_view_from_ptr_range() {
        let buf = *b"abcdef";
        let range = buf[1..4].as_ptr_range();
        let view = unsafe { ByteView::from_ptr_range(range.start, range.end) };
        assert_eq!(view.length(), 3);
        assert_eq!(view.as_slice(), b"bcd");
    }

    #[test]
    fn test_view_from_null_c_str() {
        let view = unsafe { ByteView::from_c_str_ptr(std::ptr::null()) };
        assert_eq!(view.length(), 0);
        assert!(view.begin().is_null());
        assert!(view.as_slice().is_empty());
    }

    #[test]
    fn test_view_from_c_str() {
        let view = unsafe { ByteView::from_c_str_ptr(b"abc\0".as_ptr().cast()) };
        assert_eq!(view.length(), 3);
        assert_eq!(view.as_slice(), b"abc");
    }

    #[test]
    fn test_view_null_raw_parts_is_empty() {
        let view = unsafe { ByteView::from_raw_parts(std::ptr::null(), 12) };
        assert_eq!(view.length(), 0);
        assert_eq!(view, ByteView::default());
    }

    #[test]
    fn test_view_copy_is_shallow() {
        let buf = vec![9u8; 8];
        let a = ByteView::from(&buf);
        let b = a;
        assert_eq!(a.begin(), b.begin());
        assert_eq!(a, b);
    }

    #[test]
    fn test_view_equality_is_range_identity() {
        let x = *b"same";
        let y = *b"same";
        let vx = ByteView::new(&x);
        let vy = ByteView::new(&y);

        assert_ne!(vx, vy);
        assert!(vx.content_eq(&vy));
        assert_eq!(vx, ByteView::new(&x));
        assert_ne!(vx, ByteView::new(&x[..3]));
    }

    #[test]
    fn test_view_default_is_empty() {
        let view = ByteView::default();
        assert!(view.is_empty());
        assert!(view.begin().is_null());
        assert!(view.end().is_null());
    }
}
