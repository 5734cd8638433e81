//! lovers - Front-End Facade
//!
//! Ties the three front-end phases together behind the four entry points a
//! caller (REPL, test harness, editor integration) actually wants:
//!
//! - [`tokenize`] / [`tokenize_with_errors`] — lexical analysis, fail-fast or
//!   best-effort.
//! - [`validate_structure`] — the light pre-parse shape check.
//! - [`parse`] — lexes, checks structure, then runs the full grammar,
//!   projecting a success into UI-friendly token rows or a failure into a
//!   single error payload.
//!
//! Nothing here touches the filesystem, the environment, or any process-wide
//! state beyond what the lexer already keeps: every entry point is a pure
//! function of its `source` argument.

pub use lovers_lex::{tokenize, tokenize_with_errors, LexError, Token, TokenKind};
pub use lovers_par::{validate_structure, ErrorCode, ParseError, Verdict};

/// One row of the token-stream projection used by UIs and debuggers.
///
/// `EOF` and `NEWLINE` tokens are never projected; they carry no
/// information a caller displaying a token table would want.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRow {
    pub lexeme: String,
    pub token: String,
    pub token_type: String,
}

/// Position and identity of a single offending token, as carried by an
/// [`ErrorPayload`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenInfo {
    pub lexeme: String,
    pub kind: String,
    pub line: u32,
    pub column: u32,
}

/// A record of one collected error, for the `errors` list of an
/// [`ErrorPayload`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorRecord {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

/// The failure shape returned by [`parse`] when any phase rejects the
/// source: the first problem found, plus every error collected along the
/// way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorPayload {
    pub code: Option<String>,
    pub message: String,
    pub expected: Vec<String>,
    pub token: Option<TokenInfo>,
    pub errors: Vec<ErrorRecord>,
}

/// What [`parse`] returns on the non-error path.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOutcome {
    Accepted(Vec<TokenRow>),
    Rejected(ErrorPayload),
}

/// Runs the full pipeline over `source`: lex, check structure, parse.
///
/// Returns `(true, Accepted(rows))` only if all three phases agree the
/// source is well-formed. Any failure short-circuits the later phases and
/// is reported through `(false, Rejected(payload))`.
pub fn parse(source: &str) -> (bool, ParseOutcome) {
    let (tokens, lex_errors) = tokenize_with_errors(source);

    if !lex_errors.is_empty() {
        let first = &lex_errors[0];
        let token = find_token_at(&tokens, first.line, first.column);
        let payload = ErrorPayload {
            code: None,
            message: first.message.clone(),
            expected: Vec::new(),
            token,
            errors: lex_errors.iter().map(lex_error_record).collect(),
        };
        return (false, ParseOutcome::Rejected(payload));
    }

    if let Verdict::Fail {
        code,
        message,
        token,
        expected,
    } = validate_structure(&tokens)
    {
        let payload = ErrorPayload {
            code: Some(code.as_str().to_string()),
            message,
            expected,
            token: token.as_ref().map(token_info),
            errors: Vec::new(),
        };
        return (false, ParseOutcome::Rejected(payload));
    }

    let (ok, errors) = lovers_par::parse(tokens.clone());
    if !ok {
        let first = errors.first();
        let payload = ErrorPayload {
            code: None,
            message: first
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "parse failed".to_string()),
            expected: first.map(|e| e.expected.clone()).unwrap_or_default(),
            token: first.and_then(|e| e.offending_token.as_ref()).map(token_info),
            errors: errors.iter().map(parse_error_record).collect(),
        };
        return (false, ParseOutcome::Rejected(payload));
    }

    (true, ParseOutcome::Accepted(project_token_rows(&tokens)))
}

/// Projects a token stream into the row shape described on [`TokenRow`],
/// dropping `EOF` and `NEWLINE`.
pub fn project_token_rows(tokens: &[Token]) -> Vec<TokenRow> {
    tokens
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Eof | TokenKind::Newline))
        .map(|t| TokenRow {
            lexeme: t.lexeme.clone(),
            token: t
                .literal
                .clone()
                .or_else(|| display_name(t.kind).map(str::to_string))
                .unwrap_or_else(|| t.lexeme.clone()),
            token_type: fold_token_type(t.kind),
        })
        .collect()
}

fn display_name(kind: TokenKind) -> Option<&'static str> {
    use TokenKind::*;
    match kind {
        LParen | RParen => Some("parenthesis"),
        LBrace | RBrace => Some("brace"),
        LBracket | RBracket => Some("bracket"),
        Semicolon => Some("semicolon"),
        Comma => Some("comma"),
        Colon => Some("colon"),
        _ => None,
    }
}

fn fold_token_type(kind: TokenKind) -> String {
    use TokenKind::*;
    match kind {
        IntLiteral => "INT_LIT".to_string(),
        FloatLiteral => "FLOAT_LIT".to_string(),
        StringLiteral => "STRING_LIT".to_string(),
        BoolLiteralTrue | BoolLiteralFalse => "BOOL_LIT".to_string(),
        other => other.name().chars().take(12).collect(),
    }
}

fn token_info(tok: &Token) -> TokenInfo {
    TokenInfo {
        lexeme: tok.lexeme.clone(),
        kind: tok.kind.name().to_string(),
        line: tok.line,
        column: tok.column,
    }
}

fn lex_error_record(err: &LexError) -> ErrorRecord {
    ErrorRecord {
        message: err.message.clone(),
        line: err.line,
        column: err.column,
    }
}

fn parse_error_record(err: &ParseError) -> ErrorRecord {
    ErrorRecord {
        message: err.message.clone(),
        line: err.line,
        column: err.column,
    }
}

fn find_token_at(tokens: &[Token], line: u32, column: u32) -> Option<TokenInfo> {
    tokens
        .iter()
        .find(|t| t.line == line && t.column == column)
        .map(token_info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_program_is_accepted_and_projected() {
        let src = "love main() { dear x = 5; express << x << periodt; }";
        let (ok, outcome) = parse(src);
        assert!(ok);
        let ParseOutcome::Accepted(rows) = outcome else {
            panic!("expected an accepted outcome");
        };
        let lexemes: Vec<&str> = rows.iter().map(|r| r.lexeme.as_str()).collect();
        assert_eq!(
            lexemes,
            [
                "love", "main", "(", ")", "{", "dear", "x", "=", "5", ";", "express", "<<", "x",
                "<<", "periodt", ";", "}"
            ]
        );
    }

    #[test]
    fn int_literal_row_folds_to_int_lit() {
        let src = "love main() { dear x = 5; }";
        let (ok, outcome) = parse(src);
        assert!(ok);
        let ParseOutcome::Accepted(rows) = outcome else {
            panic!("expected an accepted outcome");
        };
        let row = rows.iter().find(|r| r.lexeme == "5").unwrap();
        assert_eq!(row.token, "5");
        assert_eq!(row.token_type, "INT_LIT");
    }

    #[test]
    fn bool_literal_row_carries_its_normalized_literal() {
        let src = "love main() { dear x = greenflag; }";
        let (ok, outcome) = parse(src);
        assert!(ok);
        let ParseOutcome::Accepted(rows) = outcome else {
            panic!("expected an accepted outcome");
        };
        let row = rows.iter().find(|r| r.lexeme == "greenflag").unwrap();
        assert_eq!(row.token, "true");
        assert_eq!(row.token_type, "BOOL_LIT");
    }

    #[test]
    fn paren_and_brace_rows_use_display_names() {
        let src = "love main() { }";
        let (ok, outcome) = parse(src);
        assert!(ok);
        let ParseOutcome::Accepted(rows) = outcome else {
            panic!("expected an accepted outcome");
        };
        let paren = rows.iter().find(|r| r.lexeme == "(").unwrap();
        assert_eq!(paren.token, "parenthesis");
        let brace = rows.iter().find(|r| r.lexeme == "{").unwrap();
        assert_eq!(brace.token, "brace");
    }

    #[test]
    fn lexical_error_short_circuits_before_structural_or_syntactic_checks() {
        let src = "love main() { dear abcdefghijklmnopqrstu = 1; }";
        let (ok, outcome) = parse(src);
        assert!(!ok);
        let ParseOutcome::Rejected(payload) = outcome else {
            panic!("expected a rejected outcome");
        };
        assert!(payload.code.is_none());
        assert!(payload.message.contains("exceeds the maximum length of 20"));
    }

    #[test]
    fn structural_failure_carries_its_error_code() {
        let src = "dear x = 5;";
        let (ok, outcome) = parse(src);
        assert!(!ok);
        let ParseOutcome::Rejected(payload) = outcome else {
            panic!("expected a rejected outcome");
        };
        assert_eq!(payload.code.as_deref(), Some("ERR_EXPECTED_LOVE"));
    }

    #[test]
    fn syntactic_failure_collects_every_parse_error() {
        let src = "love main() { dear x = 5 } dear y = 6; love main() { }";
        let (ok, outcome) = parse(src);
        assert!(!ok);
        let ParseOutcome::Rejected(payload) = outcome else {
            panic!("expected a rejected outcome");
        };
        assert!(!payload.errors.is_empty());
    }
}
