//! Operator and punctuation lexing, plus the post-emission follow-set
//! check for what may legally come next.

use super::core::Lexer;
use crate::error::LexError;
use crate::follow;
use crate::token::{Token, TokenKind};

/// Two-character operators, longest-match-first is unnecessary here since
/// every entry is exactly two characters; checked before falling back to
/// the single-character table.
const TWO_CHAR_OPS: &[(&str, TokenKind)] = &[
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    (">=", TokenKind::GtEq),
    ("<=", TokenKind::LtEq),
    (">>", TokenKind::Shr),
    ("<<", TokenKind::Shl),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("+=", TokenKind::PlusEq),
    ("-=", TokenKind::MinusEq),
    ("*=", TokenKind::StarEq),
    ("/=", TokenKind::SlashEq),
    ("%=", TokenKind::PercentEq),
    ("::", TokenKind::ColonColon),
    ("->", TokenKind::Arrow),
];

fn single_char_kind(c: char) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match c {
        '+' => Plus,
        '-' => Minus,
        '*' => Star,
        '/' => Slash,
        '%' => Percent,
        '=' => Assign,
        '>' => Gt,
        '<' => Lt,
        '!' => Bang,
        '&' => Amp,
        '|' => Pipe,
        ';' => Semicolon,
        ',' => Comma,
        ':' => Colon,
        '(' => LParen,
        ')' => RParen,
        '{' => LBrace,
        '}' => RBrace,
        '[' => LBracket,
        ']' => RBracket,
        _ => return None,
    })
}

impl<'a> Lexer<'a> {
    pub(crate) fn lex_operator_or_punct(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let two: String = [self.cursor.current_char(), self.cursor.peek_char(1)]
            .iter()
            .copied()
            .collect();

        if let Some((lexeme, kind)) = TWO_CHAR_OPS.iter().find(|(l, _)| *l == two) {
            self.cursor.advance();
            self.cursor.advance();
            self.validate_operator_follow(lexeme, line, column)?;
            return Ok(Token::new(*kind, *lexeme, line, column));
        }

        let c = self.cursor.current_char();
        if let Some(kind) = single_char_kind(c) {
            self.cursor.advance();
            let lexeme = c.to_string();
            self.validate_operator_follow(&lexeme, line, column)?;
            return Ok(Token::new(kind, lexeme, line, column));
        }

        self.cursor.advance();
        Err(LexError::new(
            format!("Unexpected character '{c}'"),
            line,
            column,
        ))
    }

    /// Peeks past inline whitespace (not consuming it) and checks the first
    /// non-whitespace character against the operator's declared follow set.
    /// Exempt operators and end-of-source are always accepted.
    fn validate_operator_follow(&self, lexeme: &str, line: u32, column: u32) -> Result<(), LexError> {
        if follow::is_follow_exempt(lexeme) {
            return Ok(());
        }
        let mut offset = 0usize;
        loop {
            let c = self.cursor.peek_char(offset);
            if c == '\0' && self.cursor.position() + offset >= self.cursor.source().len() {
                return Ok(()); // end of source
            }
            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                offset += 1;
                continue;
            }
            let set = follow::reserved_symbol_follow(lexeme).unwrap_or_else(follow::identifier_follows);
            return if set.contains(c) {
                Ok(())
            } else {
                Err(LexError::new(
                    format!("Operator `{lexeme}` cannot be followed by '{c}'"),
                    line,
                    column,
                ))
            };
        }
    }
}
