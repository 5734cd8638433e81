//! Lexical error type.
//!
//! Every per-token check in the scanner can fail with one of these. In
//! fail-fast mode ([`crate::tokenize`]) the first one returned aborts
//! scanning; in collect-errors mode ([`crate::tokenize_with_errors`]) each
//! one is appended to the error list and scanning resumes after recovery.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.column)
    }
}

impl std::error::Error for LexError {}
