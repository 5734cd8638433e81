//! Cursor primitives shared by every grammar production: lookahead,
//! expectation, error recording, and synchronization.

use crate::error::ParseError;
use lovers_lex::{Token, TokenKind};

/// Recursive-descent parser over a token stream.
///
/// The parser never builds a tree; each production either consumes the
/// tokens its grammar rule calls for or records a [`ParseError`] and lets
/// the caller decide whether to resynchronize. `NEWLINE` tokens carry no
/// grammatical weight and are dropped up front.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    pub(crate) errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Newline)
            .collect();
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Runs the full `program` grammar and returns whether it parsed
    /// without error, along with every collected error.
    pub fn parse(mut self) -> (bool, Vec<ParseError>) {
        self.parse_program();
        log::debug!(
            "parsed {} token(s) with {} error(s)",
            self.tokens.len(),
            self.errors.len()
        );
        (self.errors.is_empty(), self.errors)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_at(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if !self.at_end() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes `kind` or records an error naming `label` as the expected
    /// lexeme. On failure the offending token is left unconsumed.
    pub(crate) fn expect(&mut self, kind: TokenKind, label: &str) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            let err = self.error_here(format!("Expected '{label}'"), &[label]);
            self.errors.push(err);
            None
        }
    }

    /// Consumes a statement-terminating `;` or records an error naming what
    /// it was expected to terminate (e.g. `"after declaration"`), matching
    /// the context-specific wording the grammar's concrete scenarios use
    /// instead of the generic `expect`'s bare `"Expected ';'"`.
    pub(crate) fn expect_semicolon(&mut self, context: &str) -> Option<Token> {
        if self.check(TokenKind::Semicolon) {
            Some(self.advance())
        } else {
            let err = self.error_here(format!("Expected ';' {context}"), &[";"]);
            self.errors.push(err);
            None
        }
    }

    pub(crate) fn error_here(&self, message: impl Into<String>, expected: &[&str]) -> ParseError {
        let tok = self.peek();
        ParseError::new(message, tok.line, tok.column)
            .with_expected(expected.iter().map(|s| s.to_string()))
            .with_token(tok.clone())
    }

    pub(crate) fn record(&mut self, err: ParseError) {
        log::warn!("{err}");
        self.errors.push(err);
    }

    /// Discards tokens until the next `;` or `}` (consuming it) or EOF.
    /// Used to resume parsing after an unrecoverable production failure.
    pub(crate) fn synchronize(&mut self) {
        log::debug!(
            "synchronizing from {}:{}",
            self.peek().line,
            self.peek().column
        );
        while !self.at_end() {
            match self.peek().kind {
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::RBrace => {
                    self.advance();
                    return;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}
