//! Core lexer implementation: the `Lexer` struct and its dispatch loop.

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Delimiters that bound identifier-like runs; used by error recovery to
/// find the next plausible resumption point.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || !crate::unicode::is_ident_continue(c)
}

/// Hand-written scanner for Lovers source text.
///
/// The lexer is a single-pass, linear scanner: each call to [`Lexer::next_token`]
/// skips whitespace/comments, records the start position, and dispatches on
/// the leading character. There is no lookahead beyond what individual
/// scanning routines peek directly from the cursor.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Scans and returns the next token, or the first lexical error
    /// encountered while scanning it.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::eof(self.cursor.line(), self.cursor.column()));
        }

        let line = self.token_start_line;
        let column = self.token_start_column;

        match self.cursor.current_char() {
            '\n' => {
                self.cursor.advance();
                Ok(Token::new(TokenKind::Newline, "\\n", line, column))
            }
            '"' => self.lex_string(),
            '\'' => Err(self.error_here("A string literal must start with '\"', not '\\''")),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            _ => self.lex_operator_or_punct(line, column),
        }
    }

    /// Builds an error anchored at the current token's start position.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> LexError {
        LexError::new(message, self.token_start_line, self.token_start_column)
    }

    /// Error-recovery resync used by [`crate::tokenize_with_errors`]: advance
    /// one character past the failure, then skip forward until whitespace,
    /// a newline, or an identifier delimiter is seen.
    pub fn recover(&mut self) {
        log::debug!(
            "recovering from lex error at {}:{}",
            self.token_start_line,
            self.token_start_column
        );
        if !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        while !self.cursor.is_at_end() && !is_delimiter(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(tok) if tok.kind == TokenKind::Eof => None,
            other => Some(other),
        }
    }
}
