//! Structural validator: a light post-lex check that a token stream is a
//! well-formed program shell — optional globals, exactly one
//! `love <ident>() { ... }` block, nothing trailing it.
//!
//! This runs before the full parser and does not build anything; it only
//! answers "is this plausibly a program" with a single pass/fail verdict.

use lovers_lex::{Token, TokenKind};

/// The closed set of structural failure codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Empty,
    ExpectedLove,
    ExpectedMain,
    ExpectedLParen,
    ExpectedRParen,
    ExpectedLBrace,
    ExpectedRBrace,
    ExpectedRBracket,
    UnexpectedRParen,
    UnexpectedRBrace,
    UnexpectedRBracket,
    ExpectedLBraceOrSemicolon,
    ExpectedSemicolon,
    UnexpectedTokenAfterMain,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            Empty => "ERR_EMPTY",
            ExpectedLove => "ERR_EXPECTED_LOVE",
            ExpectedMain => "ERR_EXPECTED_MAIN",
            ExpectedLParen => "ERR_EXPECTED_LPAREN",
            ExpectedRParen => "ERR_EXPECTED_RPAREN",
            ExpectedLBrace => "ERR_EXPECTED_LBRACE",
            ExpectedRBrace => "ERR_EXPECTED_RBRACE",
            ExpectedRBracket => "ERR_EXPECTED_RBRACKET",
            UnexpectedRParen => "ERR_UNEXPECTED_RPAREN",
            UnexpectedRBrace => "ERR_UNEXPECTED_RBRACE",
            UnexpectedRBracket => "ERR_UNEXPECTED_RBRACKET",
            ExpectedLBraceOrSemicolon => "ERR_EXPECTED_LBRACE_OR_SEMICOLON",
            ExpectedSemicolon => "ERR_EXPECTED_SEMICOLON",
            UnexpectedTokenAfterMain => "ERR_UNEXPECTED_TOKEN_AFTER_MAIN",
        }
    }
}

/// Outcome of [`validate_structure`].
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Ok(String),
    Fail {
        code: ErrorCode,
        message: String,
        token: Option<Token>,
        expected: Vec<String>,
    },
}

fn fail(
    code: ErrorCode,
    message: impl Into<String>,
    token: Option<&Token>,
    expected: &[&str],
) -> Verdict {
    let message = message.into();
    log::warn!("structural check rejected: {} ({})", message, code.as_str());
    Verdict::Fail {
        code,
        message,
        token: token.cloned(),
        expected: expected.iter().map(|s| s.to_string()).collect(),
    }
}

fn is_type_kind(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Dear | TokenKind::Dearest | TokenKind::Rant | TokenKind::Status
    )
}

fn matching_close(open: TokenKind) -> TokenKind {
    match open {
        TokenKind::LParen => TokenKind::RParen,
        TokenKind::LBrace => TokenKind::RBrace,
        TokenKind::LBracket => TokenKind::RBracket,
        _ => unreachable!("matching_close called on a non-opening kind"),
    }
}

fn expected_code_for(open: TokenKind) -> ErrorCode {
    match open {
        TokenKind::LParen => ErrorCode::ExpectedRParen,
        TokenKind::LBrace => ErrorCode::ExpectedRBrace,
        TokenKind::LBracket => ErrorCode::ExpectedRBracket,
        _ => unreachable!("expected_code_for called on a non-opening kind"),
    }
}

fn unexpected_code_for(close: TokenKind) -> ErrorCode {
    match close {
        TokenKind::RParen => ErrorCode::UnexpectedRParen,
        TokenKind::RBrace => ErrorCode::UnexpectedRBrace,
        TokenKind::RBracket => ErrorCode::UnexpectedRBracket,
        _ => unreachable!("unexpected_code_for called on a non-closing kind"),
    }
}

/// Checks that `(){}[]` form a well-matched Dyck word across the whole
/// stream. Returns the first balance failure, if any.
fn check_delimiter_balance(tokens: &[Token]) -> Option<Verdict> {
    let mut stack: Vec<&Token> = Vec::new();
    for tok in tokens {
        match tok.kind {
            TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => stack.push(tok),
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                match stack.pop() {
                    Some(open) if matching_close(open.kind) == tok.kind => {}
                    Some(open) => {
                        return Some(fail(
                            expected_code_for(open.kind),
                            format!(
                                "Expected '{}' to close '{}' opened at {}:{}",
                                display_lexeme(matching_close(open.kind)),
                                open.lexeme,
                                open.line,
                                open.column
                            ),
                            Some(open),
                            &[display_lexeme(matching_close(open.kind))],
                        ));
                    }
                    None => {
                        return Some(fail(
                            unexpected_code_for(tok.kind),
                            format!("Unexpected '{}' with no matching opener", tok.lexeme),
                            Some(tok),
                            &[],
                        ));
                    }
                }
            }
            _ => {}
        }
    }
    if let Some(open) = stack.pop() {
        return Some(fail(
            expected_code_for(open.kind),
            format!(
                "Expected '{}' to close '{}' opened at {}:{}",
                display_lexeme(matching_close(open.kind)),
                open.lexeme,
                open.line,
                open.column
            ),
            Some(open),
            &[display_lexeme(matching_close(open.kind))],
        ));
    }
    None
}

fn display_lexeme(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::LParen => "(",
        TokenKind::RParen => ")",
        TokenKind::LBrace => "{",
        TokenKind::RBrace => "}",
        TokenKind::LBracket => "[",
        TokenKind::RBracket => "]",
        _ => "?",
    }
}

/// Skips a balanced `open`/`close` run starting at `tokens[*pos]` (which
/// must be `open`). Leaves `*pos` just past the matching close.
fn skip_balanced(tokens: &[Token], pos: &mut usize, open: TokenKind) {
    let close = matching_close(open);
    let mut depth = 0usize;
    while *pos < tokens.len() {
        let kind = tokens[*pos].kind;
        *pos += 1;
        if kind == open {
            depth += 1;
        } else if kind == close {
            depth -= 1;
            if depth == 0 {
                return;
            }
        }
    }
}

/// Skips forward to the next top-level `;` (respecting paren/bracket/brace
/// nesting), consuming it. Used for the light declaration-terminator scan.
fn skip_to_semicolon(tokens: &[Token], pos: &mut usize) -> bool {
    while *pos < tokens.len() {
        match tokens[*pos].kind {
            TokenKind::Semicolon => {
                *pos += 1;
                return true;
            }
            TokenKind::LParen => skip_balanced(tokens, pos, TokenKind::LParen),
            TokenKind::LBracket => skip_balanced(tokens, pos, TokenKind::LBracket),
            TokenKind::LBrace => skip_balanced(tokens, pos, TokenKind::LBrace),
            _ => *pos += 1,
        }
    }
    false
}

/// Consumes zero or more globals (declarations or function shells)
/// greedily, stopping as soon as `love` is seen.
fn consume_globals(tokens: &[Token], pos: &mut usize) -> Option<Verdict> {
    loop {
        let Some(tok) = tokens.get(*pos) else {
            return None;
        };
        if tok.kind == TokenKind::Love {
            return None;
        }
        if tok.kind == TokenKind::Boundaries {
            *pos += 1;
            if tokens.get(*pos).map(|t| t.kind) != Some(TokenKind::Identifier) {
                return Some(fail(
                    ErrorCode::ExpectedMain,
                    "Expected an identifier after 'boundaries'",
                    tokens.get(*pos),
                    &["IDENTIFIER"],
                ));
            }
            *pos += 1;
            match tokens.get(*pos).map(|t| t.kind) {
                Some(TokenKind::LBrace) => skip_balanced(tokens, pos, TokenKind::LBrace),
                _ => {
                    return Some(fail(
                        ErrorCode::ExpectedLBrace,
                        "Expected '{' to open the boundaries block",
                        tokens.get(*pos),
                        &["{"],
                    ))
                }
            }
            continue;
        }
        if is_type_kind(tok.kind) && tokens.get(*pos + 1).map(|t| t.kind) == Some(TokenKind::Identifier) {
            *pos += 2;
            if tokens.get(*pos).map(|t| t.kind) == Some(TokenKind::LParen) {
                skip_balanced(tokens, pos, TokenKind::LParen);
                match tokens.get(*pos).map(|t| t.kind) {
                    Some(TokenKind::LBrace) => skip_balanced(tokens, pos, TokenKind::LBrace),
                    Some(TokenKind::Semicolon) => *pos += 1,
                    _ => {
                        return Some(fail(
                            ErrorCode::ExpectedLBraceOrSemicolon,
                            "Expected '{' or ';' after a function signature",
                            tokens.get(*pos),
                            &["{", ";"],
                        ))
                    }
                }
            } else if !skip_to_semicolon(tokens, pos) {
                return Some(fail(
                    ErrorCode::ExpectedSemicolon,
                    "Expected ';' after a global declaration",
                    tokens.get(*pos),
                    &[";"],
                ));
            }
            continue;
        }
        return Some(fail(
            ErrorCode::ExpectedLove,
            format!("Expected 'love' main block, found '{}'", tok.lexeme),
            Some(tok),
            &["love"],
        ));
    }
}

/// Checks that `tokens` (already stripped of `NEWLINE`) forms a well-shaped
/// program: optional globals/boundaries, exactly one `love` block, nothing
/// trailing it.
pub fn validate_structure(tokens: &[Token]) -> Verdict {
    let filtered: Vec<Token> = tokens
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Newline | TokenKind::Eof))
        .cloned()
        .collect();

    if filtered.is_empty() {
        return fail(ErrorCode::Empty, "Source contains no tokens", None, &[]);
    }

    if let Some(v) = check_delimiter_balance(&filtered) {
        return v;
    }

    let mut pos = 0usize;
    if let Some(v) = consume_globals(&filtered, &mut pos) {
        return v;
    }

    macro_rules! expect {
        ($kind:expr, $code:expr, $label:expr) => {
            match filtered.get(pos) {
                Some(t) if t.kind == $kind => {
                    pos += 1;
                }
                other => return fail($code, format!("Expected {}", $label), other, &[$label]),
            }
        };
    }

    expect!(TokenKind::Love, ErrorCode::ExpectedLove, "love");
    expect!(TokenKind::Identifier, ErrorCode::ExpectedMain, "IDENTIFIER");
    expect!(TokenKind::LParen, ErrorCode::ExpectedLParen, "(");
    expect!(TokenKind::RParen, ErrorCode::ExpectedRParen, ")");
    expect!(TokenKind::LBrace, ErrorCode::ExpectedLBrace, "{");

    let mut depth = 1usize;
    while pos < filtered.len() {
        match filtered[pos].kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                depth -= 1;
                if depth == 0 {
                    pos += 1;
                    break;
                }
            }
            _ => {}
        }
        pos += 1;
    }
    if depth != 0 {
        return fail(
            ErrorCode::ExpectedRBrace,
            "Expected '}' to close the love block",
            filtered.last(),
            &["}"],
        );
    }

    if pos < filtered.len() {
        return fail(
            ErrorCode::UnexpectedTokenAfterMain,
            format!(
                "Unexpected '{}' after the end of the love block",
                filtered[pos].lexeme
            ),
            Some(&filtered[pos]),
            &[],
        );
    }

    log::debug!("structural check accepted {} token(s)", filtered.len());
    Verdict::Ok("program accepted".to_string())
}
