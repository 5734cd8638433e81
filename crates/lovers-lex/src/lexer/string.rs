//! String literal lexing: escape processing and the closing-quote
//! follow-set check.

use super::core::Lexer;
use crate::error::LexError;
use crate::follow;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self) -> Result<Token, LexError> {
        let line = self.token_start_line;
        let column = self.token_start_column;
        let raw_start = self.cursor.position();
        self.cursor.advance(); // opening '"'

        let mut content = String::new();
        let mut escaped = false;

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::new("Unterminated string literal", line, column));
            }
            let c = self.cursor.current_char();
            if escaped {
                let decoded = match c {
                    '"' => '"',
                    '\\' => '\\',
                    'n' => '\n',
                    't' => '\t',
                    other => {
                        return Err(LexError::new(
                            format!("Invalid escape sequence `\\{other}` in string"),
                            line,
                            column,
                        ))
                    }
                };
                content.push(decoded);
                escaped = false;
                self.cursor.advance();
                continue;
            }
            match c {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\\' => {
                    escaped = true;
                    self.cursor.advance();
                }
                '\n' => {
                    return Err(LexError::new("Unterminated string literal", line, column));
                }
                _ => {
                    content.push(c);
                    self.cursor.advance();
                }
            }
        }

        let lexeme = self.cursor.slice_from(raw_start).to_string();
        self.validate_string_close_follow(&lexeme, line, column)?;
        Ok(Token::new(TokenKind::StringLiteral, lexeme, line, column).with_literal(content))
    }

    fn validate_string_close_follow(
        &self,
        lexeme: &str,
        line: u32,
        column: u32,
    ) -> Result<(), LexError> {
        if self.cursor.is_at_end() {
            return Ok(());
        }
        let next = self.cursor.current_char();
        let set = follow::reserved_symbol_follow("\"").expect("string close follow is defined");
        if set.contains(next) {
            Ok(())
        } else {
            Err(LexError::new(
                format!("String literal `{lexeme}` cannot be followed by '{next}'"),
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
    fn simple_string_literal() {
        let mut lexer = Lexer::new("\"hello\";");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::StringLiteral);
        assert_eq!(tok.literal.as_deref(), Some("hello"));
        assert_eq!(tok.lexeme, "\"hello\"");
    }

    #[test]
    fn escapes_are_decoded() {
        let mut lexer = Lexer::new("\"a\\tb\\nc\\\"d\\\\e\";");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.literal.as_deref(), Some("a\tb\nc\"d\\e"));
    }

    #[test]
    fn invalid_escape_errors() {
        let mut lexer = Lexer::new("\"\\q\";");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("Invalid escape sequence `\\q`"));
    }

    #[test]
    fn unterminated_string_at_eof_errors() {
        let mut lexer = Lexer::new("\"never closes");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("Unterminated string literal"));
    }

    #[test]
    fn raw_newline_inside_string_errors() {
        let mut lexer = Lexer::new("\"line1\nline2\"");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("Unterminated string literal"));
    }

    #[test]
    fn leading_single_quote_is_fatal() {
        let mut lexer = Lexer::new("'x'");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("must start with"));
    }
}
