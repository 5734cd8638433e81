//! Whitespace and comment skipping.
//!
//! Inline whitespace, newlines (emitted as `NEWLINE` tokens by the caller),
//! line comments (`// ...`), and block comments (`/* ... */`) are all
//! skipped here before a token's start position is recorded.

use super::core::Lexer;
use crate::error::LexError;

impl<'a> Lexer<'a> {
    /// Skips runs of inline whitespace and comments. Stops at a `\n` (which
    /// the caller turns into a `NEWLINE` token), at end of input, or at the
    /// first character that starts a real token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\x0c' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.skip_line_comment();
                }
                '/' if self.cursor.peek_char(1) == '*' => {
                    self.skip_block_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::new(
                    "Unterminated block comment",
                    start_line,
                    start_column,
                ));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn line_comment_is_skipped() {
        let mut lexer = Lexer::new("// nothing here\ndear");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Newline);
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Dear);
    }

    #[test]
    fn block_comment_is_skipped() {
        let mut lexer = Lexer::new("/* hi\nthere */dear");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Dear);
    }

    #[test]
    fn unterminated_block_comment_errors() {
        let mut lexer = Lexer::new("/* never closes");
        let err = lexer.next_token().unwrap_err();
        assert!(err.message.contains("Unterminated block comment"));
    }
}
