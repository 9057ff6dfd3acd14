//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects EOF without explicit bounds checking. The total
//! buffer size is rounded up to the next 64-byte boundary, which also
//! provides safe zero padding for `peek()` reads near the end.
//!
//! Interior null bytes in the source are legal at this layer; the cursor
//! distinguishes them from the sentinel by position (see [`Cursor::is_eof`]).

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Copies the source bytes into a zero-filled buffer whose tail bytes
    /// (sentinel plus padding) are already `0x00`.
    ///
    /// # Panics
    /// Panics if the source exceeds `u32::MAX` bytes; Cool sources are
    /// tiny and byte offsets are stored as `u32` throughout the front end.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len_u32 = u32::try_from(source_len)
            .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// The source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The source content as `&str`.
    #[allow(
        unsafe_code,
        reason = "buffer was constructed from &str; content bytes are valid UTF-8"
    )]
    pub fn as_str(&self) -> &str {
        // SAFETY: `new()` copies the bytes of a `&str` verbatim, so
        // `buf[..source_len]` is valid UTF-8.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Count `\n` bytes in a slice using SIMD-accelerated search.
///
/// The lexer uses this to advance its line counter across multi-line
/// tokens (block comments, strings with line continuations).
pub fn count_newlines(bytes: &[u8]) -> u32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "newline count is bounded by the u32 source length"
    )]
    let count = memchr::memchr_iter(b'\n', bytes).count() as u32;
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_preserves_content() {
        let buf = SourceBuffer::new("class Main {};");
        assert_eq!(buf.as_bytes(), b"class Main {};");
        assert_eq!(buf.as_str(), "class Main {};");
        assert_eq!(buf.len(), 14);
        assert!(!buf.is_empty());
    }

    #[test]
    fn empty_source() {
        let buf = SourceBuffer::new("");
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert!(buf.cursor().is_eof());
    }

    #[test]
    fn sentinel_and_padding_are_zero() {
        let buf = SourceBuffer::new("abc");
        let cursor = buf.cursor();
        // Walk past the content: the next reads hit sentinel/padding.
        assert_eq!(cursor.slice(0, 3), "abc");
        let mut c = cursor;
        c.advance_n(3);
        assert_eq!(c.current(), 0);
        assert_eq!(c.peek(), 0);
        assert!(c.is_eof());
    }

    #[test]
    fn interior_null_preserved() {
        let buf = SourceBuffer::new("a\0b");
        assert_eq!(buf.as_bytes(), b"a\0b");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn count_newlines_basic() {
        assert_eq!(count_newlines(b""), 0);
        assert_eq!(count_newlines(b"no newlines here"), 0);
        assert_eq!(count_newlines(b"a\nb\nc"), 2);
        assert_eq!(count_newlines(b"\n\n\n"), 3);
        assert_eq!(count_newlines(b"\r\n"), 1);
    }
}
