//! Expression parsing: a ten-level precedence chain from assignment down
//! to primary, each level a small function that defers to the next
//! tighter one before looking for its own operators.
//!
//! The parser is validation-only — these functions consume tokens and
//! report errors but never build a tree; `Some(())` means "a
//! syntactically valid expression was consumed here".

use super::core::Parser;
use lovers_lex::TokenKind;

const ASSIGN_OPS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::PlusEq,
    TokenKind::MinusEq,
    TokenKind::StarEq,
    TokenKind::SlashEq,
    TokenKind::PercentEq,
];

impl Parser {
    pub(crate) fn parse_expr(&mut self) -> Option<()> {
        self.parse_assignment()
    }

    /// Level 1, right-associative: `=`, `+=`, `-=`, `*=`, `/=`, `%=`.
    fn parse_assignment(&mut self) -> Option<()> {
        self.parse_logical_or()?;
        if ASSIGN_OPS.contains(&self.peek().kind) {
            self.advance();
            return self.parse_assignment();
        }
        Some(())
    }

    /// Level 2: `||`.
    fn parse_logical_or(&mut self) -> Option<()> {
        self.parse_logical_and()?;
        while self.match_kind(TokenKind::OrOr).is_some() {
            self.parse_logical_and()?;
        }
        Some(())
    }

    /// Level 3: `&&`.
    fn parse_logical_and(&mut self) -> Option<()> {
        self.parse_equality()?;
        while self.match_kind(TokenKind::AndAnd).is_some() {
            self.parse_equality()?;
        }
        Some(())
    }

    /// Level 4: `==`, `!=`.
    fn parse_equality(&mut self) -> Option<()> {
        self.parse_comparison()?;
        while matches!(self.peek().kind, TokenKind::EqEq | TokenKind::NotEq) {
            self.advance();
            self.parse_comparison()?;
        }
        Some(())
    }

    /// Level 5: `<`, `>`, `<=`, `>=`.
    fn parse_comparison(&mut self) -> Option<()> {
        self.parse_additive()?;
        while matches!(
            self.peek().kind,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq
        ) {
            self.advance();
            self.parse_additive()?;
        }
        Some(())
    }

    /// Level 6: `+`, `-`.
    fn parse_additive(&mut self) -> Option<()> {
        self.parse_multiplicative()?;
        while matches!(self.peek().kind, TokenKind::Plus | TokenKind::Minus) {
            self.advance();
            self.parse_multiplicative()?;
        }
        Some(())
    }

    /// Level 7: `*`, `/`, `%`.
    fn parse_multiplicative(&mut self) -> Option<()> {
        self.parse_unary()?;
        while matches!(
            self.peek().kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            self.advance();
            self.parse_unary()?;
        }
        Some(())
    }

    /// Level 8, prefix: `!`, `-`, `++`, `--`.
    fn parse_unary(&mut self) -> Option<()> {
        if matches!(
            self.peek().kind,
            TokenKind::Bang | TokenKind::Minus | TokenKind::PlusPlus | TokenKind::MinusMinus
        ) {
            self.advance();
            return self.parse_unary();
        }
        self.parse_postfix()
    }

    /// Level 9: call `(args?)` and index `[expr]`, both repeatable.
    fn parse_postfix(&mut self) -> Option<()> {
        self.parse_primary()?;
        loop {
            if self.match_kind(TokenKind::LParen).is_some() {
                if !self.check(TokenKind::RParen) {
                    self.parse_expr()?;
                    while self.match_kind(TokenKind::Comma).is_some() {
                        self.parse_expr()?;
                    }
                }
                self.expect(TokenKind::RParen, ")")?;
            } else if self.match_kind(TokenKind::LBracket).is_some() {
                self.parse_expr()?;
                self.expect(TokenKind::RBracket, "]")?;
            } else {
                break;
            }
        }
        Some(())
    }

    /// Level 10: identifier, any literal, or a parenthesized expression.
    fn parse_primary(&mut self) -> Option<()> {
        match self.peek().kind {
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteralTrue
            | TokenKind::BoolLiteralFalse => {
                self.advance();
                Some(())
            }
            TokenKind::LParen => {
                self.advance();
                self.parse_expr()?;
                self.expect(TokenKind::RParen, ")")?;
                Some(())
            }
            _ => {
                let err = self.error_here(
                    format!("Expected an expression, found '{}'", self.peek().lexeme),
                    &["expression"],
                );
                self.record(err);
                // An unrecognized leading token would otherwise stall every
                // enclosing loop forever; skip it so recovery can proceed.
                self.advance();
                None
            }
        }
    }
}
