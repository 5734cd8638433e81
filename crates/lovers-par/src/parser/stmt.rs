//! Blocks and statements: I/O forms, conditionals, the three loop
//! shapes, switch/case, and the jump statements.

use super::core::Parser;
use lovers_lex::TokenKind;

fn is_type_kind(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Dear | TokenKind::Dearest | TokenKind::Rant | TokenKind::Status
    )
}

impl Parser {
    /// `block := '{' (decl | statement)* '}'`
    pub(crate) fn parse_block(&mut self) -> bool {
        if self.expect(TokenKind::LBrace, "{").is_none() {
            return false;
        }
        while !self.at_end() && !self.check(TokenKind::RBrace) {
            let ok = if is_type_kind(self.peek().kind) {
                self.parse_decl_in_block()
            } else {
                self.parse_statement()
            };
            if !ok {
                self.synchronize();
            }
        }
        self.expect(TokenKind::RBrace, "}").is_some()
    }

    /// A local declaration inside a block shares the global `decl`
    /// grammar; exposed here under the block's own name for clarity.
    fn parse_decl_in_block(&mut self) -> bool {
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

    fn parse_statement(&mut self) -> bool {
        match self.peek().kind {
            TokenKind::Give => self.parse_input(),
            TokenKind::Express => self.parse_output(),
            TokenKind::Overshare => self.parse_overshare(),
            TokenKind::Forever => self.parse_if(),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::Pursue => self.parse_do_while(),
            TokenKind::Choose => self.parse_switch(),
            TokenKind::Breakup => self.parse_break(),
            TokenKind::Moveon => self.parse_continue(),
            TokenKind::Comeback => self.parse_return(),
            _ => {
                if self.parse_expr().is_none() {
                    return false;
                }
                self.expect(TokenKind::Semicolon, ";").is_some()
            }
        }
    }

    /// `input := 'give' '>>' expr ';'`
    fn parse_input(&mut self) -> bool {
        self.advance(); // 'give'
        if self.expect(TokenKind::Shr, ">>").is_none() {
            return false;
        }
        if self.parse_expr().is_none() {
            return false;
        }
        self.expect(TokenKind::Semicolon, ";").is_some()
    }

    /// `output := 'express' '<<' output_val ('<<' output_val)* ';'`
    fn parse_output(&mut self) -> bool {
        self.advance(); // 'express'
        if self.expect(TokenKind::Shl, "<<").is_none() {
            return false;
        }
        if !self.parse_output_val() {
            return false;
        }
        while self.match_kind(TokenKind::Shl).is_some() {
            if !self.parse_output_val() {
                return false;
            }
        }
        self.expect(TokenKind::Semicolon, ";").is_some()
    }

    /// `output_val := 'periodt' | expr`
    fn parse_output_val(&mut self) -> bool {
        if self.match_kind(TokenKind::Periodt).is_some() {
            return true;
        }
        self.parse_expr().is_some()
    }

    /// `overshare := 'overshare' '(' arg_list? ')' ';'`
    fn parse_overshare(&mut self) -> bool {
        self.advance(); // 'overshare'
        if self.expect(TokenKind::LParen, "(").is_none() {
            return false;
        }
        if !self.check(TokenKind::RParen) {
            if self.parse_expr().is_none() {
                return false;
            }
            while self.match_kind(TokenKind::Comma).is_some() {
                if self.parse_expr().is_none() {
                    return false;
                }
            }
        }
        if self.expect(TokenKind::RParen, ")").is_none() {
            return false;
        }
        self.expect(TokenKind::Semicolon, ";").is_some()
    }

    /// `if := 'forever' '(' expr ')' block ('forevermore' '(' expr ')' block)* ('more' block)?`
    fn parse_if(&mut self) -> bool {
        self.advance(); // 'forever'
        if !self.parse_cond_and_block() {
            return false;
        }
        while self.check(TokenKind::Forevermore) {
            self.advance();
            if !self.parse_cond_and_block() {
                return false;
            }
        }
        if self.match_kind(TokenKind::More).is_some() {
            return self.parse_block();
        }
        true
    }

    fn parse_cond_and_block(&mut self) -> bool {
        if self.expect(TokenKind::LParen, "(").is_none() {
            return false;
        }
        if self.parse_expr().is_none() {
            return false;
        }
        if self.expect(TokenKind::RParen, ")").is_none() {
            return false;
        }
        self.parse_block()
    }

    /// `for_loop := 'for' '(' (decl | expr ';') expr ';' expr ')' block`
    fn parse_for(&mut self) -> bool {
        self.advance(); // 'for'
        if self.expect(TokenKind::LParen, "(").is_none() {
            return false;
        }
        let init_ok = if is_type_kind(self.peek().kind) {
            self.parse_decl_in_block()
        } else if self.check(TokenKind::Semicolon) {
            self.advance();
            true
        } else {
            self.parse_expr().is_some() && self.expect(TokenKind::Semicolon, ";").is_some()
        };
        if !init_ok {
            return false;
        }
        if self.parse_expr().is_none() {
            return false;
        }
        if self.expect(TokenKind::Semicolon, ";").is_none() {
            return false;
        }
        if self.parse_expr().is_none() {
            return false;
        }
        if self.expect(TokenKind::RParen, ")").is_none() {
            return false;
        }
        self.parse_block()
    }

    /// `while_loop := 'while' '(' expr ')' block`
    fn parse_while(&mut self) -> bool {
        self.advance(); // 'while'
        self.parse_cond_and_block()
    }

    /// `do_while := 'pursue' block 'while' '(' expr ')' ';'`
    fn parse_do_while(&mut self) -> bool {
        self.advance(); // 'pursue'
        if !self.parse_block() {
            return false;
        }
        if self.expect(TokenKind::While, "while").is_none() {
            return false;
        }
        if self.expect(TokenKind::LParen, "(").is_none() {
            return false;
        }
        if self.parse_expr().is_none() {
            return false;
        }
        if self.expect(TokenKind::RParen, ")").is_none() {
            return false;
        }
        self.expect(TokenKind::Semicolon, ";").is_some()
    }

    /// `switch := 'choose' '(' expr ')' '{' ('phase' expr ':' block)* ('bareminimum' ':' block)? '}'`
    fn parse_switch(&mut self) -> bool {
        self.advance(); // 'choose'
        if self.expect(TokenKind::LParen, "(").is_none() {
            return false;
        }
        if self.parse_expr().is_none() {
            return false;
        }
        if self.expect(TokenKind::RParen, ")").is_none() {
            return false;
        }
        if self.expect(TokenKind::LBrace, "{").is_none() {
            return false;
        }
        while self.check(TokenKind::Phase) {
            self.advance();
            if self.parse_expr().is_none() {
                return false;
            }
            if self.expect(TokenKind::Colon, ":").is_none() {
                return false;
            }
            if !self.parse_block() {
                return false;
            }
        }
        if self.match_kind(TokenKind::Bareminimum).is_some() {
            if self.expect(TokenKind::Colon, ":").is_none() {
                return false;
            }
            if !self.parse_block() {
                return false;
            }
        }
        self.expect(TokenKind::RBrace, "}").is_some()
    }

    /// `break := 'breakup' ';'`
    fn parse_break(&mut self) -> bool {
        self.advance();
        self.expect(TokenKind::Semicolon, ";").is_some()
    }

    /// `continue := 'moveon' ';'`
    fn parse_continue(&mut self) -> bool {
        self.advance();
        self.expect(TokenKind::Semicolon, ";").is_some()
    }

    /// `return := 'comeback' expr? ';'`
    fn parse_return(&mut self) -> bool {
        self.advance();
        if !self.check(TokenKind::Semicolon) && self.parse_expr().is_none() {
            return false;
        }
        self.expect(TokenKind::Semicolon, ";").is_some()
    }
}
