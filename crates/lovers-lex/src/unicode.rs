//! Character classification helpers for the Lovers lexer.
//!
//! The language restricts identifiers and reserved words to the ASCII
//! letter/digit/underscore alphabet, so these helpers stay ASCII-only
//! rather than leaning on `char::is_alphabetic`/`is_alphanumeric`, which
//! would also accept non-ASCII letters the grammar never defines.

/// A letter that may start an identifier or reserved word: `[A-Za-z]`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// A letter, digit, or underscore that may continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Inline whitespace skipped between a token and its follow-set check:
/// space, tab, carriage return, and newline.
#[inline]
pub fn is_inline_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
