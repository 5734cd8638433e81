//! Identifier and reserved-word lexing.

use super::core::Lexer;
use crate::error::LexError;
use crate::follow;
use crate::token::{lookup_reserved, Token, TokenKind};
use crate::unicode::is_ident_continue;
use lovers_util::Symbol;

/// Characters that may never immediately follow an identifier, except for
/// the two whitelisted digraphs `!=` and `||`.
const BAD_SYMBOLS_AFTER_IDENTIFIER: [char; 9] = ['!', '@', '#', '$', '^', '|', '\\', '?', '~'];

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> Result<Token, LexError> {
        let line = self.token_start_line;
        let column = self.token_start_column;
        let start = self.cursor.position();

        while !self.cursor.is_at_end() && is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);

        if text.chars().count() > 20 {
            return Err(LexError::new(
                format!("Identifier `{text}` exceeds the maximum length of 20 characters"),
                line,
                column,
            ));
        }

        let next = self.cursor.current_char();
        if BAD_SYMBOLS_AFTER_IDENTIFIER.contains(&next) {
            let is_not_eq = next == '!' && self.cursor.peek_char(1) == '=';
            let is_or_or = next == '|' && self.cursor.peek_char(1) == '|';
            if !is_not_eq && !is_or_or {
                return Err(LexError::new(
                    format!("Identifier `{text}` cannot be followed by '{next}'"),
                    line,
                    column,
                ));
            }
        }

        if let Some((kind, canonical)) = lookup_reserved(text) {
            self.validate_reserved_follow(text, line, column)?;
            let mut tok = Token::new(kind, text, line, column).with_canonical(canonical);
            tok = match kind {
                TokenKind::BoolLiteralTrue => tok.with_literal("true"),
                TokenKind::BoolLiteralFalse => tok.with_literal("false"),
                _ => tok,
            };
            return Ok(tok);
        }

        let lowered = text.to_lowercase();
        if lookup_reserved(&lowered).is_some() {
            return Err(LexError::new(
                format!("Reserved word `{lowered}` must be written in lowercase"),
                line,
                column,
            ));
        }
        if lowered == "true" || lowered == "false" {
            return Err(LexError::new(
                format!("`{text}` is not a valid identifier; use greenflag or redflag"),
                line,
                column,
            ));
        }

        let symbol = Symbol::intern(text);
        Ok(Token::new(TokenKind::Identifier, text, line, column).with_symbol(symbol))
    }

    fn validate_reserved_follow(&self, word: &str, line: u32, column: u32) -> Result<(), LexError> {
        if self.cursor.is_at_end() {
            return Ok(());
        }
        let next = self.cursor.current_char();
        let set = follow::reserved_word_follow(word);
        if set.contains(next) {
            Ok(())
        } else {
            Err(LexError::new(
                format!("Reserved word `{word}` cannot be followed by '{next}'"),
                line,
                column,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn plain_identifier_is_tokenized() {
        let mut lexer = Lexer::new("myVar ");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.lexeme, "myVar");
    }

    #[test]
    fn reserved_word_is_tokenized_as_its_kind() {
        let mut lexer = Lexer::new("love main");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Love);
        assert_eq!(tok.canonical, Some("love"));
    }

    #[test]
    fn greenflag_and_redflag_are_bool_literals() {
        let mut lexer = Lexer::new("greenflag redflag");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::BoolLiteralTrue);
        assert_eq!(tok.literal.as_deref(), Some("true"));
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::BoolLiteralFalse);
        assert_eq!(tok.literal.as_deref(), Some("false"));
    }

    #[test]
    fn identifier_too_long_errors() {
        let mut lexer = Lexer::new("abcdefghijklmnopqrstu");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("exceeds the maximum length of 20"));
        assert_eq!(err.column, 1);
    }

    #[test]
    fn mixed_case_reserved_word_errors() {
        let mut lexer = Lexer::new("Dear x");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("must be written in lowercase"));
    }

    #[test]
    fn true_false_are_rejected_as_identifiers() {
        let mut lexer = Lexer::new("true");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("greenflag or redflag"));
    }

    #[test]
    fn bad_symbol_after_identifier_errors() {
        let mut lexer = Lexer::new("foo@bar");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("cannot be followed by"));
    }

    #[test]
    fn not_eq_is_whitelisted_after_identifier() {
        let mut lexer = Lexer::new("foo!=1");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::NotEq);
    }

    #[test]
    fn or_or_is_whitelisted_after_identifier() {
        let mut lexer = Lexer::new("foo||bar");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::OrOr);
    }
}
