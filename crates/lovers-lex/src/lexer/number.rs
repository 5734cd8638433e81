//! Integer and floating-point literal lexing, including the range/precision
//! rules and the normalized-`literal` projection exposed on each token.

use super::core::Lexer;
use crate::error::LexError;
use crate::follow;
use crate::token::{Token, TokenKind};

const INT_MAX: u64 = 9_999_999_999;
const FLOAT_MAX: f64 = 9_999_999_999.999_999;

fn strip_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn normalize_fraction(digits: &str) -> String {
    let trimmed = digits.trim_end_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else if trimmed.len() > 6 {
        trimmed[..6].to_string()
    } else {
        trimmed.to_string()
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self) -> Result<Token, LexError> {
        let line = self.token_start_line;
        let column = self.token_start_column;
        let start = self.cursor.position();

        while !self.cursor.is_at_end() && self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let is_float =
            self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();

        if is_float {
            self.cursor.advance(); // '.'
            while !self.cursor.is_at_end() && self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let lexeme = self.cursor.slice_from(start).to_string();
        self.check_abutment(&lexeme, line, column)?;

        if is_float {
            self.finish_float(&lexeme, line, column)
        } else {
            self.finish_int(&lexeme, line, column)
        }
    }

    fn check_abutment(&self, lexeme: &str, line: u32, column: u32) -> Result<(), LexError> {
        if self.cursor.is_at_end() {
            return Ok(());
        }
        let next = self.cursor.current_char();
        if follow::identifier_follows().contains(next) {
            Ok(())
        } else {
            Err(LexError::new(
                format!("Numeric literal `{lexeme}` cannot be followed by '{next}'"),
                line,
                column,
            ))
        }
    }

    fn finish_int(&self, lexeme: &str, line: u32, column: u32) -> Result<Token, LexError> {
        let stripped = strip_leading_zeros(lexeme);
        if stripped.len() > 10 {
            return Err(LexError::new(
                format!(
                    "Integer literal `{lexeme}` exceeds maximum length of 10 digits"
                ),
                line,
                column,
            ));
        }
        let value: u64 = stripped.parse().map_err(|_| {
            LexError::new(
                format!("Integer literal `{lexeme}` is not a valid number"),
                line,
                column,
            )
        })?;
        if value > INT_MAX {
            return Err(LexError::new(
                format!("Integer literal `{lexeme}` exceeds maximum value of {INT_MAX}"),
                line,
                column,
            ));
        }
        Ok(Token::new(TokenKind::IntLiteral, lexeme, line, column).with_literal(stripped))
    }

    fn finish_float(&self, lexeme: &str, line: u32, column: u32) -> Result<Token, LexError> {
        let (int_raw, frac_raw) = lexeme.split_once('.').expect("float literal has a dot");
        let int_stripped = strip_leading_zeros(int_raw);

        if int_stripped.len() > 10 {
            return Err(LexError::new(
                format!(
                    "Float literal `{lexeme}` exceeds maximum length of 10 digits before the decimal point"
                ),
                line,
                column,
            ));
        }
        let frac_norm = normalize_fraction(frac_raw);
        if int_stripped.len() + frac_norm.len() > 16 {
            return Err(LexError::new(
                format!(
                    "Float literal `{lexeme}` exceeds maximum length of 16 significant digits"
                ),
                line,
                column,
            ));
        }
        let value: f64 = format!("{int_stripped}.{frac_raw}").parse().map_err(|_| {
            LexError::new(
                format!("Float literal `{lexeme}` is not a valid number"),
                line,
                column,
            )
        })?;
        if value > FLOAT_MAX {
            return Err(LexError::new(
                format!("Float literal `{lexeme}` exceeds maximum value of {FLOAT_MAX}"),
                line,
                column,
            ));
        }

        let literal = format!("{int_stripped}.{frac_norm}");
        Ok(Token::new(TokenKind::FloatLiteral, lexeme, line, column).with_literal(literal))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn plain_int_literal() {
        let mut lexer = Lexer::new("42;");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::IntLiteral);
        assert_eq!(tok.literal.as_deref(), Some("42"));
    }

    #[test]
    fn int_overflow_errors() {
        let mut lexer = Lexer::new("99999999999;");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("exceeds maximum length of 10 digits"));
    }

    #[test]
    fn float_literal_is_normalized() {
        let mut lexer = Lexer::new("03.1400000;");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::FloatLiteral);
        assert_eq!(tok.literal.as_deref(), Some("3.14"));
    }

    #[test]
    fn float_fraction_truncated_to_six_digits() {
        let mut lexer = Lexer::new("1.123456789;");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.literal.as_deref(), Some("1.123456"));
    }

    #[test]
    fn float_with_zero_fraction_normalizes_to_zero() {
        let mut lexer = Lexer::new("5.000000;");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.literal.as_deref(), Some("5.0"));
    }

    #[test]
    fn numeral_abutting_identifier_errors() {
        let mut lexer = Lexer::new("5x");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("cannot be followed by"));
    }

    #[test]
    fn dot_not_followed_by_digit_is_not_consumed() {
        let mut lexer = Lexer::new("5.;");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::IntLiteral);
        assert_eq!(tok.lexeme, "5");
    }

    #[test]
    fn sixteen_digit_bound_counts_the_normalized_fraction_not_the_raw_one() {
        let mut lexer = Lexer::new("1234567890.1234567;");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::FloatLiteral);
        assert_eq!(tok.literal.as_deref(), Some("1234567890.123456"));
    }
}
