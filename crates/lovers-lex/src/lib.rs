//! lovers-lex - Lexical Analyzer
//!
//! Hand-written single-pass scanner for the Lovers language: reserved
//! words, identifiers, numeric and string literals, and multi/single
//! character operators, each validated against a contextual follow-set
//! check for what may legally come next in the source.
//!
//! Two entry points are exposed, matching the two ways callers want to
//! consume a source file:
//!
//! - [`tokenize`] fails fast on the first lexical error.
//! - [`tokenize_with_errors`] always returns a token stream — best-effort —
//!   together with every error encountered, recovering after each one.

pub mod cursor;
pub mod error;
pub mod follow;
pub mod lexer;
pub mod token;
mod unicode;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenizes `source`, stopping at the first lexical error.
///
/// On success the returned vector always ends with exactly one `Token`
/// of kind [`TokenKind::Eof`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token()?;
        let is_eof = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}

/// Tokenizes `source`, collecting every lexical error instead of stopping
/// at the first one.
///
/// Recovery advances past the offending character and skips forward to
/// the next whitespace, newline, or identifier delimiter before resuming.
/// The returned token vector always ends with exactly one `Token` of kind
/// [`TokenKind::Eof`], even when errors were collected.
pub fn tokenize_with_errors(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(tok) => {
                let is_eof = tok.kind == TokenKind::Eof;
                tokens.push(tok);
                if is_eof {
                    break;
                }
            }
            Err(err) => {
                log::warn!("{err}");
                errors.push(err);
                lexer.recover();
            }
        }
    }
    log::debug!(
        "tokenized {} token(s) with {} error(s)",
        tokens.len(),
        errors.len()
    );
    (tokens, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_tokenizes_the_love_block() {
        let src = "love main() { dear x = 5; express << x << periodt; }";
        let tokens = tokenize(src).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds.last(), Some(&TokenKind::Eof));
        assert_eq!(kinds[0], TokenKind::Love);
        assert!(kinds.contains(&TokenKind::Dear));
        assert!(kinds.contains(&TokenKind::Express));
        assert!(kinds.contains(&TokenKind::Periodt));
    }

    #[test]
    fn eof_is_exactly_one_and_last() {
        let tokens = tokenize("dear x;").unwrap();
        let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eof_count, 1);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn tokenize_fails_fast_on_first_error() {
        let src = "dear abcdefghijklmnopqrstu = 1;";
        let err = tokenize(src).unwrap_err();
        assert!(err.message.contains("exceeds the maximum length of 20"));
    }

    #[test]
    fn tokenize_with_errors_recovers_and_keeps_scanning() {
        let src = "dear @ x; dear y;";
        let (tokens, errors) = tokenize_with_errors(src);
        assert_eq!(errors.len(), 1);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Dear));
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn tokenize_with_errors_always_terminates_with_eof() {
        let src = "dear !!! x";
        let (tokens, _errors) = tokenize_with_errors(src);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn newline_tokens_are_preserved() {
        let tokens = tokenize("dear x;\ndear y;").unwrap();
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Newline));
    }

    #[test]
    fn token_lexemes_are_exact_source_slices() {
        let src = "dear x = 5;";
        let tokens = tokenize(src).unwrap();
        let lexemes: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(lexemes, ["dear", "x", "=", "5", ";"]);
    }
}
