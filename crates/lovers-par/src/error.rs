//! Parser diagnostics: a single record type covering every "expected X,
//! found Y" failure the grammar can produce.

use lovers_lex::Token;

/// A single syntax error recorded while parsing. The parser never stops
/// at the first one — every production reports and continues.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: u32,
    pub column: u32,
    /// Lexemes (or class names like `expression`) that would have been
    /// accepted at this point.
    pub expected: Vec<String>,
    /// The token actually found, when one exists (absent only when the
    /// error is raised past end-of-stream).
    pub offending_token: Option<Token>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            expected: Vec::new(),
            offending_token: None,
        }
    }

    pub fn with_expected(mut self, expected: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.expected = expected.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_token(mut self, token: Token) -> Self {
        self.offending_token = Some(token);
        self
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.column)
    }
}

impl std::error::Error for ParseError {}
