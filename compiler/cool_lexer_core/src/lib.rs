//! Low-level tokenizer for Cool.
//!
//! This crate turns raw source text into `(RawTag, len)` pairs with zero
//! heap allocation. It does not resolve keywords, classify identifiers,
//! process string escapes, or parse numeric values; those belong to the
//! cooking layer in `cool_lexer`.
//!
//! # Pipeline position
//!
//! ```text
//! source → SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```
//!
//! Malformed input never aborts the scan: error conditions (unterminated
//! comment, stray `*)`, bad string) are encoded as [`RawTag`] variants and
//! scanning resumes at the next unconsumed byte.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::{count_newlines, SourceBuffer};
pub use tag::{RawTag, RawToken};
