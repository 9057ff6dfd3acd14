//! Shared data model for the Cool compiler front end.
//!
//! Provides the types that flow between compilation stages: source spans,
//! interned names, and tokens. Everything here is a plain value type with
//! `Clone`/`Eq`/`Hash` so downstream stages can store and compare results
//! freely.

mod interner;
mod name;
mod span;
mod token;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};

/// Compile-time size assertion for frequently-allocated types.
///
/// Fails the build if the type's size drifts from the expected value.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: () = assert!(std::mem::size_of::<$ty>() == $size);
    };
}
