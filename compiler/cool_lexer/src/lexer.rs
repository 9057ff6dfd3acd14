//! The pull-based lexer driver.
//!
//! Owns the scan state the classic implementation kept in globals: the
//! byte offset, the 1-based line counter, and the source filename are all
//! fields here, so multiple independent lexers can run in one process and
//! tests stay deterministic.

use cool_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use cool_lexer_core::{count_newlines, RawScanner, RawTag, SourceBuffer};

use crate::cooker::TokenCooker;
use crate::lex_error::LexError;

/// The Cool lexer.
///
/// Call [`next_token`](Self::next_token) repeatedly until it returns
/// [`TokenKind::Eof`]; further calls keep returning EOF. One lexer scans
/// one attached buffer; it is not meant to be shared across threads.
pub struct Lexer<'src> {
    scanner: RawScanner<'src>,
    cooker: TokenCooker<'src>,
    /// Byte offset of the next unconsumed character.
    offset: u32,
    /// 1-based line number, incremented on every newline consumed,
    /// including newlines inside block comments and string continuations.
    line: u32,
    /// Interned source filename, `"<stdin>"` by default.
    filename: Name,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over an attached source buffer.
    ///
    /// The buffer and interner must outlive the lexer; tokens borrow
    /// nothing (payloads are interned), so they may outlive all three.
    pub fn new(buffer: &'src SourceBuffer, interner: &'src StringInterner) -> Self {
        Self {
            scanner: RawScanner::new(buffer.cursor()),
            cooker: TokenCooker::new(buffer.as_str(), interner),
            offset: 0,
            line: 1,
            filename: interner.intern("<stdin>"),
        }
    }

    /// Set the filename reported alongside diagnostics.
    #[must_use]
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = self.cooker.interner().intern(filename);
        self
    }

    /// The interned source filename.
    pub fn filename(&self) -> Name {
        self.filename
    }

    /// The line number at end-of-scan of the most recent token.
    ///
    /// Read this immediately after the `next_token` call that produced
    /// the token of interest; later calls advance it.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Errors accumulated so far.
    pub fn errors(&self) -> &[LexError] {
        self.cooker.errors()
    }

    /// Consume the lexer, returning all accumulated errors.
    pub fn into_errors(self) -> Vec<LexError> {
        self.cooker.into_errors()
    }

    /// Produce the next token.
    ///
    /// Skips trivia (whitespace, newlines, comments), keeping the line
    /// counter up to date, and cooks the first non-trivia raw token.
    /// Returns an `Eof` token once the input is exhausted, indefinitely.
    pub fn next_token(&mut self) -> Token {
        loop {
            let raw = self.scanner.next_token();
            let start = self.offset;
            self.offset += raw.len;

            // Line bookkeeping happens before the token is handed out, so
            // `line()` reflects the line at end-of-scan.
            match raw.tag {
                RawTag::Newline => {
                    self.line += 1;
                    continue;
                }
                RawTag::Whitespace | RawTag::LineComment => continue,
                RawTag::BlockComment => {
                    self.line += self.newlines_in(start, self.offset);
                    continue;
                }
                // Multi-line non-trivia: block comments cut off by EOF and
                // strings with line continuations.
                RawTag::CommentEof
                | RawTag::String
                | RawTag::StringNewline
                | RawTag::StringEof
                | RawTag::StringNull => {
                    self.line += self.newlines_in(start, self.offset);
                }
                _ => {}
            }

            if raw.tag == RawTag::Eof {
                return Token::new(TokenKind::Eof, Span::point(start));
            }
            let kind = self.cooker.cook(raw.tag, start, raw.len, self.line);
            return Token::new(kind, Span::new(start, self.offset));
        }
    }

    fn newlines_in(&self, start: u32, end: u32) -> u32 {
        count_newlines(&self.cooker.source().as_bytes()[start as usize..end as usize])
    }
}

/// Tokenize an entire source, returning the token list (EOF token
/// included) and every lexical error encountered.
///
/// This is the batch-mode entry point used by the CLI and by tests; for
/// streaming access construct a [`SourceBuffer`] and a [`Lexer`] directly.
pub fn tokenize(source: &str, interner: &StringInterner) -> (TokenList, Vec<LexError>) {
    let buffer = SourceBuffer::new(source);
    let mut lexer = Lexer::new(&buffer, interner);
    let mut tokens = TokenList::new();
    loop {
        let token = lexer.next_token();
        let line = lexer.line();
        let done = token.kind.is_eof();
        tokens.push(token, line);
        if done {
            break;
        }
    }
    (tokens, lexer.into_errors())
}
