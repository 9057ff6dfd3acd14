//! Escape resolution for string constants.
//!
//! Cool's escape rule is permissive: `\c` stands for `c` itself unless
//! `c` is one of `n`, `t`, `b`, `f`, which map to their control
//! characters. An escaped newline (backslash at end of line) therefore
//! resolves to a newline character; that is how a string constant spans
//! multiple source lines.

/// Maximum cooked length of a string constant, in bytes.
///
/// Exceeding this turns the literal into an error token rather than a
/// string token.
pub const MAX_STR_CONST: usize = 1024;

/// Resolve the escape sequences in a string literal's content (the text
/// between the quotes).
///
/// Fast path: if the content has no backslashes there is nothing to
/// resolve, and `None` signals the caller can intern the source slice
/// directly.
pub(crate) fn unescape_string(content: &str) -> Option<String> {
    if !content.contains('\\') {
        return None;
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('b') => result.push('\u{8}'),
                Some('f') => result.push('\u{C}'),
                // Everything else, including `\"`, `\\`, and the escaped
                // newline of a line continuation, is the character itself.
                Some(other) => result.push(other),
                // Trailing backslash only occurs in literals cut off by
                // EOF; those never reach the unescaper.
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    Some(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_escapes_takes_fast_path() {
        assert_eq!(unescape_string("plain text"), None);
        assert_eq!(unescape_string(""), None);
    }

    #[test]
    fn control_escapes_resolve() {
        assert_eq!(unescape_string(r"a\nb").unwrap(), "a\nb");
        assert_eq!(unescape_string(r"a\tb").unwrap(), "a\tb");
        assert_eq!(unescape_string(r"a\bb").unwrap(), "a\u{8}b");
        assert_eq!(unescape_string(r"a\fb").unwrap(), "a\u{C}b");
    }

    #[test]
    fn other_escapes_are_identity() {
        assert_eq!(unescape_string(r#"\""#).unwrap(), "\"");
        assert_eq!(unescape_string(r"\\").unwrap(), "\\");
        assert_eq!(unescape_string(r"\c").unwrap(), "c");
        assert_eq!(unescape_string(r"\0").unwrap(), "0");
    }

    #[test]
    fn line_continuation_resolves_to_newline() {
        assert_eq!(
            unescape_string("This is a multi-line\\\nstring constant").unwrap(),
            "This is a multi-line\nstring constant"
        );
    }

    #[test]
    fn escaped_backslash_does_not_escape_next() {
        assert_eq!(unescape_string(r"\\n").unwrap(), "\\n");
    }

    #[test]
    fn mixed_content() {
        assert_eq!(
            unescape_string("tab\\there\\nand \\\"quotes\\\"").unwrap(),
            "tab\there\nand \"quotes\""
        );
    }
}
