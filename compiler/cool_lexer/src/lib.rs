//! Lexer for the Cool compiler.
//!
//! Sits on top of the raw scanner (`cool_lexer_core`) and produces the
//! parser's `Token` values with string interning, keyword resolution,
//! escape processing, and integer parsing:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! The [`Lexer`] is a pull-based scanner: call [`Lexer::next_token`] until
//! it returns [`TokenKind::Eof`](cool_ir::TokenKind::Eof). Malformed input
//! never aborts the scan: each malformed construct yields exactly one
//! `Error` token carrying its diagnostic message, and scanning resumes at
//! the next unconsumed character (or the next line, for strings cut off by
//! a raw newline). Structured [`LexError`] records accumulate alongside
//! for the caller's diagnostic presentation.

mod cook_escape;
mod cooker;
mod keywords;
mod lex_error;
mod lexer;

pub use cook_escape::MAX_STR_CONST;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{tokenize, Lexer};

// Re-exported so callers can attach input without naming the core crate.
pub use cool_lexer_core::SourceBuffer;
