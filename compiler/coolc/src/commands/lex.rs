//! The `lex` command: tokenize a file and dump the token stream.
//!
//! Output format, one token per line:
//!
//! ```text
//! #name "hello.cl"
//! #1 CLASS
//! #1 TYPEID Main
//! #2 STR_CONST "Hello, World.\n"
//! #3 ERROR "unmatched *)"
//! ```
//!
//! String and error payloads are printed in source notation: control
//! characters as their escape sequences, other unprintable bytes as
//! 3-digit octal escapes. Lexical errors are additionally summarized on
//! stderr as `file:line: message`.

use std::io::{self, Write};
use std::path::Path;

use cool_ir::{StringInterner, Token, TokenKind, TokenList};
use cool_lexer::tokenize;

use super::read_file;

/// Tokenize `path` and dump the token stream to stdout.
///
/// Returns the process exit code: 0 on a clean scan, 1 if the file could
/// not be read or contained lexical errors.
pub fn lex_file(path: &str) -> i32 {
    let source = match read_file(Path::new(path)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("coolc: cannot read '{path}': {e}");
            return 1;
        }
    };
    tracing::debug!(path, bytes = source.len(), "lexing file");

    let interner = StringInterner::new();
    let (tokens, errors) = tokenize(&source, &interner);
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scan complete");

    let stdout = io::stdout();
    if let Err(e) = dump_tokens(&mut stdout.lock(), path, &tokens, &interner) {
        eprintln!("coolc: write failed: {e}");
        return 1;
    }

    for error in &errors {
        eprintln!("{path}:{}: {}", error.line, error.message());
    }
    i32::from(!errors.is_empty())
}

/// Write the `#name` header and every token to `out`.
fn dump_tokens<W: Write>(
    out: &mut W,
    path: &str,
    tokens: &TokenList,
    interner: &StringInterner,
) -> io::Result<()> {
    writeln!(out, "#name {path:?}")?;
    for (line, token) in tokens.iter_with_lines() {
        if token.kind.is_eof() {
            break;
        }
        writeln!(out, "{}", format_token(line, token, interner))?;
    }
    Ok(())
}

/// Render one token as `#<line> <NAME> [payload]`.
pub(crate) fn format_token(line: u32, token: &Token, interner: &StringInterner) -> String {
    let name = token.kind.name();
    match token.kind {
        TokenKind::Int(value) => format!("#{line} {name} {value}"),
        TokenKind::Bool(value) => format!("#{line} {name} {value}"),
        TokenKind::TypeId(id) | TokenKind::ObjectId(id) => {
            format!("#{line} {name} {}", interner.lookup(id))
        }
        TokenKind::Str(s) | TokenKind::Error(s) => {
            format!("#{line} {name} \"{}\"", escape_payload(interner.lookup(s)))
        }
        _ => format!("#{line} {name}"),
    }
}

/// Escape a string payload back into source notation.
///
/// Named escapes for the characters Cool has names for, 3-digit octal
/// for the remaining unprintables.
fn escape_payload(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || c == '\u{7F}' => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests {
    use super::*;
    use cool_ir::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_payload_named_escapes() {
        assert_eq!(escape_payload("a\tb\nc"), "a\\tb\\nc");
        assert_eq!(escape_payload("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_payload("back\\slash"), "back\\\\slash");
        assert_eq!(escape_payload("\u{8}\u{C}"), "\\b\\f");
    }

    #[test]
    fn escape_payload_octal_for_unprintables() {
        assert_eq!(escape_payload("\u{1}"), "\\001");
        assert_eq!(escape_payload("\u{1B}"), "\\033");
        assert_eq!(escape_payload("\u{7F}"), "\\177");
        assert_eq!(escape_payload("\0"), "\\000");
    }

    #[test]
    fn escape_payload_passes_printables_through() {
        assert_eq!(escape_payload("plain text 123"), "plain text 123");
    }

    #[test]
    fn format_token_variants() {
        let interner = StringInterner::new();
        let span = Span::DUMMY;
        let cases = [
            (Token::new(TokenKind::Class, span), "#1 CLASS"),
            (Token::new(TokenKind::Darrow, span), "#1 DARROW"),
            (Token::new(TokenKind::Plus, span), "#1 '+'"),
            (Token::new(TokenKind::Int(42), span), "#1 INT_CONST 42"),
            (Token::new(TokenKind::Bool(true), span), "#1 BOOL_CONST true"),
            (
                Token::new(TokenKind::ObjectId(interner.intern("id_123")), span),
                "#1 OBJECTID id_123",
            ),
            (
                Token::new(TokenKind::TypeId(interner.intern("Main")), span),
                "#1 TYPEID Main",
            ),
            (
                Token::new(TokenKind::Str(interner.intern("a\tb")), span),
                "#1 STR_CONST \"a\\tb\"",
            ),
            (
                Token::new(TokenKind::Error(interner.intern("unmatched *)")), span),
                "#1 ERROR \"unmatched *)\"",
            ),
        ];
        for (token, expected) in cases {
            assert_eq!(format_token(1, &token, &interner), expected);
        }
    }

    #[test]
    fn dump_includes_header_and_skips_eof() {
        let interner = StringInterner::new();
        let (tokens, errors) = tokenize("class Main;\n\"s\"", &interner);
        assert!(errors.is_empty());

        let mut out = Vec::new();
        dump_tokens(&mut out, "test.cl", &tokens, &interner).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "#name \"test.cl\"\n\
             #1 CLASS\n\
             #1 TYPEID Main\n\
             #1 ';'\n\
             #2 STR_CONST \"s\"\n"
        );
    }

    #[test]
    fn dump_renders_error_tokens() {
        let interner = StringInterner::new();
        let (tokens, errors) = tokenize("*)", &interner);
        assert_eq!(errors.len(), 1);

        let mut out = Vec::new();
        dump_tokens(&mut out, "bad.cl", &tokens, &interner).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "#name \"bad.cl\"\n\
             #1 ERROR \"unmatched *)\"\n"
        );
    }
}
