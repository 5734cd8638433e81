//! Top-level grammar: the program shell, the `boundaries` namespace
//! block, global declarations, and function definitions.

use super::core::Parser;
use lovers_lex::TokenKind;

fn is_type_kind(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Dear | TokenKind::Dearest | TokenKind::Rant | TokenKind::Status
    )
}

impl Parser {
    /// `program := NEWLINE* boundaries? global* love_main NEWLINE* EOF`
    ///
    /// `NEWLINE` has already been stripped by [`Parser::new`], so this is
    /// just `boundaries? global* love_main EOF`.
    pub(crate) fn parse_program(&mut self) {
        if self.check(TokenKind::Boundaries) && !self.parse_boundaries() {
            self.synchronize();
        }

        while !self.at_end() && !self.check(TokenKind::Love) {
            if !self.parse_global() {
                self.synchronize();
            }
        }

        if !self.parse_love_main() {
            self.synchronize();
        }

        if !self.at_end() {
            let err = self.error_here(
                format!(
                    "Unexpected '{}' after the end of the love block",
                    self.peek().lexeme
                ),
                &[],
            );
            self.record(err);
        }
    }

    /// `boundaries := 'boundaries' IDENT '{' global* '}'`
    fn parse_boundaries(&mut self) -> bool {
        self.advance(); // 'boundaries'
        if self.expect(TokenKind::Identifier, "IDENTIFIER").is_none() {
            return false;
        }
        if self.expect(TokenKind::LBrace, "{").is_none() {
            return false;
        }
        while !self.at_end() && !self.check(TokenKind::RBrace) {
            if !self.parse_global() {
                self.synchronize();
            }
        }
        self.expect(TokenKind::RBrace, "}").is_some()
    }

    /// `global := decl | function`, disambiguated by a 3-token lookahead:
    /// `TYPE IDENT '('` starts a function, anything else starting with a
    /// type keyword is a declaration.
    fn parse_global(&mut self) -> bool {
        if !is_type_kind(self.peek().kind) {
            let err = self.error_here(
                format!("Expected a type keyword, found '{}'", self.peek().lexeme),
                &["dear", "dearest", "rant", "status"],
            );
            self.record(err);
            return false;
        }
        if self.peek_at(1).kind == TokenKind::Identifier && self.peek_at(2).kind == TokenKind::LParen {
            self.parse_function()
        } else {
            self.parse_decl()
        }
    }

    /// `function := TYPE IDENT param_list block`
    fn parse_function(&mut self) -> bool {
        self.advance(); // TYPE
        if self.expect(TokenKind::Identifier, "IDENTIFIER").is_none() {
            return false;
        }
        if !self.parse_param_list() {
            return false;
        }
        self.parse_block()
    }

    /// `param_list := '(' ( param (',' param)* )? ')'`
    fn parse_param_list(&mut self) -> bool {
        if self.expect(TokenKind::LParen, "(").is_none() {
            return false;
        }
        if !self.check(TokenKind::RParen) {
            if !self.parse_param() {
                return false;
            }
            while self.match_kind(TokenKind::Comma).is_some() {
                if !self.parse_param() {
                    return false;
                }
            }
        }
        self.expect(TokenKind::RParen, ")").is_some()
    }

    /// `param := TYPE IDENT array_dims`
    fn parse_param(&mut self) -> bool {
        if !is_type_kind(self.peek().kind) {
            let err = self.error_here(
                format!("Expected a parameter type, found '{}'", self.peek().lexeme),
                &["dear", "dearest", "rant", "status"],
            );
            self.record(err);
            return false;
        }
        self.advance();
        if self.expect(TokenKind::Identifier, "IDENTIFIER").is_none() {
            return false;
        }
        self.parse_array_dims()
    }

    /// `decl := TYPE declarator (',' declarator)* ';'`
    fn parse_decl(&mut self) -> bool {
        self.advance(); // TYPE
        if !self.parse_declarator() {
            return false;
        }
        while self.match_kind(TokenKind::Comma).is_some() {
            if !self.parse_declarator() {
                return false;
            }
        }
        self.expect_semicolon("after declaration").is_some()
    }

    /// `declarator := IDENT array_dims ('=' expr)?`
    pub(crate) fn parse_declarator(&mut self) -> bool {
        if self.expect(TokenKind::Identifier, "IDENTIFIER").is_none() {
            return false;
        }
        if !self.parse_array_dims() {
            return false;
        }
        if self.match_kind(TokenKind::Assign).is_some() {
            return self.parse_expr().is_some();
        }
        true
    }

    /// `array_dims := ('[' (expr)? ']')*`
    pub(crate) fn parse_array_dims(&mut self) -> bool {
        while self.match_kind(TokenKind::LBracket).is_some() {
            if !self.check(TokenKind::RBracket) && self.parse_expr().is_none() {
                return false;
            }
            if self.expect(TokenKind::RBracket, "]").is_none() {
                return false;
            }
        }
        true
    }

    /// `love_main := 'love' IDENT '(' ')' block`
    fn parse_love_main(&mut self) -> bool {
        if self.expect(TokenKind::Love, "love").is_none() {
            return false;
        }
        if self.expect(TokenKind::Identifier, "IDENTIFIER").is_none() {
            return false;
        }
        if self.expect(TokenKind::LParen, "(").is_none() {
            return false;
        }
        if self.expect(TokenKind::RParen, ")").is_none() {
            return false;
        }
        self.parse_block()
    }
}
