//! Raw token tags produced by the scanner.

/// Raw token category.
///
/// Error conditions are encoded as tags, not `Result::Err`, so the scan
/// never aborts: the cooking layer turns the error tags into error tokens
/// with diagnostic messages and scanning continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawTag {
    // ── Trivia ───────────────────────────────────────────────────────
    /// Run of horizontal whitespace: space, tab, form feed, carriage return.
    Whitespace,
    /// Single `\n`. Kept separate from `Whitespace` for line counting.
    Newline,
    /// `--` comment through end of line (newline not included).
    LineComment,
    /// Balanced `(*` ... `*)` comment, nesting resolved.
    BlockComment,

    // ── Comment errors ───────────────────────────────────────────────
    /// EOF reached inside an open block comment.
    CommentEof,
    /// `*)` with no open comment.
    CommentClose,

    // ── Literals & identifiers ───────────────────────────────────────
    /// Letter followed by letters, digits, underscores. Keyword and
    /// boolean resolution happens in the cooking layer.
    Ident,
    /// Maximal run of ASCII digits.
    Int,
    /// Complete string literal including both quotes.
    String,
    /// String terminated by a raw newline; the newline is NOT consumed,
    /// so scanning resynchronizes at the start of the next line.
    StringNewline,
    /// EOF before the closing quote.
    StringEof,
    /// String containing an embedded NUL byte. The rest of the literal
    /// (through its closing quote or terminating newline) is consumed.
    StringNull,

    // ── Multi-character operators ────────────────────────────────────
    /// `=>`
    Darrow,
    /// `<-`
    Assign,
    /// `<=`
    LessEqual,

    // ── Single-character tokens ──────────────────────────────────────
    Plus,
    Minus,
    Star,
    Slash,
    Tilde,
    Less,
    Equal,
    Dot,
    Comma,
    Semicolon,
    Colon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    At,

    /// A character no lexical rule matches (full UTF-8 character consumed).
    InvalidChar,

    /// End of input; always has `len == 0`.
    Eof,
}

impl RawTag {
    /// Returns `true` for tags the cooking layer never turns into tokens
    /// (whitespace and well-formed comments).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::BlockComment
        )
    }
}

/// A raw token: category plus consumed byte length.
///
/// Offsets are not stored; the driver accumulates them, so consecutive
/// raw tokens partition the source exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
