//! Cool compiler front end.
//!
//! Currently the lexical stage: `coolc lex` tokenizes Cool source files
//! and dumps the token stream in the traditional one-token-per-line
//! format. The library surface exists so command implementations can be
//! unit-tested; the binary in `main.rs` is argument dispatch only.

pub mod commands;
