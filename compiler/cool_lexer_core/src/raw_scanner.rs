//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, classify identifiers, or process escapes; those are deferred
//! to the cooking layer.
//!
//! # Design
//!
//! Main dispatch switches on the current byte. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! The sentinel byte (`0x00`) naturally dispatches to EOF handling.
//! Comment nesting is resolved here (a depth counter local to the scan of
//! one block comment); string escape *consumption* happens here, but
//! escape *resolution* happens in the cooking layer.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.nul_or_eof(start),
            b' ' | b'\t' | 0x0C | b'\r' => self.whitespace(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'-' => self.minus_or_comment(start),
            b'(' => self.paren_or_comment(start),
            b'*' => self.star_or_comment_close(start),
            b'<' => self.less(start),
            b'=' => self.equal(start),
            b'+' => self.single(start, RawTag::Plus),
            b'/' => self.single(start, RawTag::Slash),
            b'~' => self.single(start, RawTag::Tilde),
            b'.' => self.single(start, RawTag::Dot),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b':' => self.single(start, RawTag::Colon),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'@' => self.single(start, RawTag::At),
            // Everything else: '_' (no identifier may start with it),
            // unused ASCII punctuation, control characters, non-ASCII.
            _ => self.invalid_char(start),
        }
    }

    /// Build a token spanning `start` to the current cursor position.
    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ─────────────────────────────────────────────────────────────

    fn nul_or_eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte at top level: no rule matches it, so it
            // becomes an unrecognized-character error like any other byte.
            self.cursor.advance();
            self.token(start, RawTag::InvalidChar)
        }
    }

    // ─── Whitespace & Newlines ───────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ────────────────────────────────────────────────────────

    fn minus_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '-'
        if self.cursor.current() == b'-' {
            self.cursor.advance(); // consume second '-'
            self.cursor.eat_until_newline_or_eof();
            self.token(start, RawTag::LineComment)
        } else {
            self.token(start, RawTag::Minus)
        }
    }

    fn paren_or_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'*' {
            self.block_comment(start)
        } else {
            self.single(start, RawTag::LeftParen)
        }
    }

    /// Scan a block comment, tracking nesting depth.
    ///
    /// The comment ends only when every `(*` has a matching `*)`. EOF
    /// with the depth still positive yields `CommentEof`.
    fn block_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2); // consume "(*"
        let mut depth: u32 = 1;
        loop {
            match self.cursor.skip_to_comment_delim() {
                b'(' => {
                    if self.cursor.peek() == b'*' {
                        self.cursor.advance_n(2);
                        depth += 1;
                    } else {
                        self.cursor.advance();
                    }
                }
                b'*' => {
                    if self.cursor.peek() == b')' {
                        self.cursor.advance_n(2);
                        depth -= 1;
                        if depth == 0 {
                            return self.token(start, RawTag::BlockComment);
                        }
                    } else {
                        self.cursor.advance();
                    }
                }
                _ => return self.token(start, RawTag::CommentEof),
            }
        }
    }

    fn star_or_comment_close(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '*'
        if self.cursor.current() == b')' {
            self.cursor.advance();
            self.token(start, RawTag::CommentClose)
        } else {
            self.token(start, RawTag::Star)
        }
    }

    // ─── Identifiers & Integers ──────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first letter (already validated)
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token(start, RawTag::Int)
    }

    // ─── Operators ───────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'-' => {
                self.cursor.advance();
                self.token(start, RawTag::Assign)
            }
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::LessEqual)
            }
            _ => self.token(start, RawTag::Less),
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '='
        if self.cursor.current() == b'>' {
            self.cursor.advance();
            self.token(start, RawTag::Darrow)
        } else {
            self.token(start, RawTag::Equal)
        }
    }

    // ─── String Literals ─────────────────────────────────────────────────

    /// Scan a string literal.
    ///
    /// Escaped characters (including an escaped newline, the line
    /// continuation) are consumed but not resolved. A raw newline stops
    /// the literal WITHOUT being consumed, so the driver resynchronizes
    /// at the start of the next line. An embedded NUL poisons the literal.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.token(start, RawTag::String);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    match self.cursor.current() {
                        0 if self.cursor.is_eof() => {
                            return self.token(start, RawTag::StringEof);
                        }
                        0 => return self.poisoned_string(start),
                        _ => self.cursor.advance(), // skip escaped char
                    }
                }
                b'\n' => return self.token(start, RawTag::StringNewline),
                _ => {
                    // skip_to_string_delim only stops on ", \, \n, or NUL
                    if self.cursor.is_eof() {
                        return self.token(start, RawTag::StringEof);
                    }
                    return self.poisoned_string(start);
                }
            }
        }
    }

    /// Consume the remainder of a NUL-poisoned literal through its closing
    /// quote or terminating newline, so scanning resumes cleanly after it.
    ///
    /// The cursor is positioned at the offending NUL byte. Additional NUL
    /// bytes fold into the same token: one error per malformed literal.
    fn poisoned_string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume the NUL
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        break;
                    }
                    self.cursor.advance();
                }
                b'\n' => break, // not consumed; resync at next line
                _ => {
                    if self.cursor.is_eof() {
                        break;
                    }
                    self.cursor.advance(); // another interior NUL
                }
            }
        }
        self.token(start, RawTag::StringNull)
    }

    // ─── Error tokens ────────────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidChar)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore. Table lookup replaces the
/// multi-range `matches!` with a single indexed read; the sentinel byte
/// (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw
/// tokens (excluding the final `Eof`).
///
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
