//! Lexer error records.
//!
//! Every malformed construct is reported twice, deliberately: as an
//! `Error` token in the stream (so a parser can fold it into its own
//! recovery) and as a [`LexError`] record here (so the driver can render
//! `file:line: message` diagnostics without re-deriving positions).
//! Both carry the same canonical message, produced by
//! [`LexErrorKind::message`].

use std::borrow::Cow;
use std::fmt;

use cool_ir::Span;

/// A lexical error with the position information needed for rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// Byte range of the offending construct.
    pub span: Span,
    /// 1-based line number at end-of-scan of the construct.
    pub line: u32,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// EOF inside an open block comment.
    UnterminatedComment,
    /// `*)` with no open comment.
    UnmatchedCommentClose,
    /// Raw newline inside a string literal.
    UnterminatedString,
    /// EOF before a string literal's closing quote.
    EofInString,
    /// Embedded NUL byte inside a string literal.
    NullInString,
    /// Cooked string content longer than [`MAX_STR_CONST`](crate::MAX_STR_CONST).
    StringTooLong,
    /// Integer literal does not fit in `u64`.
    IntTooLarge,
    /// A character no lexical rule matches; the message is the character
    /// itself.
    Unrecognized(char),
}

impl LexErrorKind {
    /// The canonical diagnostic message for this error.
    ///
    /// These strings are the `Error` token payloads; parsers and tests
    /// compare against them verbatim.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            LexErrorKind::UnterminatedComment => "EOF in comment".into(),
            LexErrorKind::UnmatchedCommentClose => "unmatched *)".into(),
            LexErrorKind::UnterminatedString => "Unterminated string constant".into(),
            LexErrorKind::EofInString => "EOF in string constant".into(),
            LexErrorKind::NullInString => "String contains null character".into(),
            LexErrorKind::StringTooLong => "String constant too long".into(),
            LexErrorKind::IntTooLarge => "Integer constant too large".into(),
            LexErrorKind::Unrecognized(c) => Cow::Owned(c.to_string()),
        }
    }
}

impl LexError {
    /// Create a new error record.
    #[cold]
    pub fn new(span: Span, line: u32, kind: LexErrorKind) -> Self {
        Self { span, line, kind }
    }

    /// The canonical diagnostic message.
    pub fn message(&self) -> Cow<'static, str> {
        self.kind.message()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_are_canonical() {
        assert_eq!(LexErrorKind::UnterminatedComment.message(), "EOF in comment");
        assert_eq!(LexErrorKind::UnmatchedCommentClose.message(), "unmatched *)");
        assert_eq!(
            LexErrorKind::UnterminatedString.message(),
            "Unterminated string constant"
        );
        assert_eq!(
            LexErrorKind::EofInString.message(),
            "EOF in string constant"
        );
        assert_eq!(
            LexErrorKind::NullInString.message(),
            "String contains null character"
        );
        assert_eq!(
            LexErrorKind::StringTooLong.message(),
            "String constant too long"
        );
        assert_eq!(
            LexErrorKind::IntTooLarge.message(),
            "Integer constant too large"
        );
    }

    #[test]
    fn unrecognized_message_is_the_character() {
        assert_eq!(LexErrorKind::Unrecognized('!').message(), "!");
        assert_eq!(LexErrorKind::Unrecognized('\\').message(), "\\");
        assert_eq!(LexErrorKind::Unrecognized('\u{03BB}').message(), "\u{03BB}");
    }

    #[test]
    fn construction_and_display() {
        let err = LexError::new(Span::new(10, 13), 3, LexErrorKind::UnterminatedString);
        assert_eq!(err.span, Span::new(10, 13));
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.to_string(), "Unterminated string constant");
    }

    #[test]
    fn errors_compare_structurally() {
        let a = LexError::new(Span::new(0, 2), 1, LexErrorKind::UnterminatedComment);
        let b = LexError::new(Span::new(0, 2), 1, LexErrorKind::UnterminatedComment);
        let c = LexError::new(Span::new(0, 2), 1, LexErrorKind::UnmatchedCommentClose);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
