//! The closed token-kind catalogue and the `Token` value the lexer emits.
//!
//! Every discriminant the scanner can produce is enumerated here; there is
//! no open-ended "unknown token" variant because unscannable input is
//! reported as a diagnostic and never reaches the token stream.

use lovers_util::Symbol;

/// Discriminant of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // -- Reserved words: I/O --
    Give,
    Express,
    Overshare,

    // -- Reserved words: types --
    Dear,
    Dearest,
    Rant,
    Status,

    // -- Reserved words: control flow --
    Forever,
    More,
    Forevermore,
    Choose,
    Phase,
    Bareminimum,
    For,
    While,
    Pursue,
    Breakup,
    Moveon,
    Comeback,

    // -- Reserved words: structural --
    Love,
    Periodt,
    Const,
    Boundaries,

    // -- Identifier --
    Identifier,

    // -- Literals --
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    BoolLiteralTrue,
    BoolLiteralFalse,

    // -- Multi-character operators --
    EqEq,
    NotEq,
    GtEq,
    LtEq,
    Shr,
    Shl,
    AndAnd,
    OrOr,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    ColonColon,
    Arrow,

    // -- Single-character operators --
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    Gt,
    Lt,
    Bang,
    Amp,
    Pipe,

    // -- Punctuation --
    Semicolon,
    Comma,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // -- Structural --
    Newline,
    Eof,
}

impl TokenKind {
    /// True for the reserved-word kinds (not identifiers, literals, or symbols).
    pub fn is_reserved_word(self) -> bool {
        RESERVED_WORDS.iter().any(|(_, kind, _)| *kind == self)
    }

    /// Display name used by the token-row projection, truncated to 12 chars
    /// by the caller per the projection contract.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Give => "GIVE",
            Express => "EXPRESS",
            Overshare => "OVERSHARE",
            Dear => "DEAR",
            Dearest => "DEAREST",
            Rant => "RANT",
            Status => "STATUS",
            Forever => "FOREVER",
            More => "MORE",
            Forevermore => "FOREVERMORE",
            Choose => "CHOOSE",
            Phase => "PHASE",
            Bareminimum => "BAREMINIMUM",
            For => "FOR",
            While => "WHILE",
            Pursue => "PURSUE",
            Breakup => "BREAKUP",
            Moveon => "MOVEON",
            Comeback => "COMEBACK",
            Love => "LOVE",
            Periodt => "PERIODT",
            Const => "CONST",
            Boundaries => "BOUNDARIES",
            Identifier => "IDENTIFIER",
            IntLiteral => "INT_LITERAL",
            FloatLiteral => "FLOAT_LITERAL",
            StringLiteral => "STRING_LITERAL",
            BoolLiteralTrue => "BOOL_LITERAL_TRUE",
            BoolLiteralFalse => "BOOL_LITERAL_FALSE",
            EqEq => "EQ_EQ",
            NotEq => "NOT_EQ",
            GtEq => "GT_EQ",
            LtEq => "LT_EQ",
            Shr => "SHR",
            Shl => "SHL",
            AndAnd => "AND_AND",
            OrOr => "OR_OR",
            PlusPlus => "PLUS_PLUS",
            MinusMinus => "MINUS_MINUS",
            PlusEq => "PLUS_EQ",
            MinusEq => "MINUS_EQ",
            StarEq => "STAR_EQ",
            SlashEq => "SLASH_EQ",
            PercentEq => "PERCENT_EQ",
            ColonColon => "COLON_COLON",
            Arrow => "ARROW",
            Plus => "PLUS",
            Minus => "MINUS",
            Star => "STAR",
            Slash => "SLASH",
            Percent => "PERCENT",
            Assign => "ASSIGN",
            Gt => "GT",
            Lt => "LT",
            Bang => "BANG",
            Amp => "AMP",
            Pipe => "PIPE",
            Semicolon => "SEMICOLON",
            Comma => "COMMA",
            Colon => "COLON",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            LBracket => "LBRACKET",
            RBracket => "RBRACKET",
            Newline => "NEWLINE",
            Eof => "EOF",
        }
    }
}

/// A single emitted token. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source slice that produced this token.
    pub lexeme: String,
    /// Interned handle for `IDENTIFIER` tokens; `None` for everything else.
    /// Reserved words, literals, and punctuation are drawn from a small
    /// closed set and are not worth interning.
    pub symbol: Option<Symbol>,
    /// Normalized inner value for string/number/bool tokens; absent otherwise.
    pub literal: Option<String>,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// 1-based column of the token's first character.
    pub column: u32,
    /// Canonical spelling for reserved words (always lowercase); `None` otherwise.
    pub canonical: Option<&'static str>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            symbol: None,
            literal: None,
            line,
            column,
            canonical: None,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn with_canonical(mut self, canonical: &'static str) -> Self {
        self.canonical = Some(canonical);
        self
    }

    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }
}

/// word → (kind, canonical spelling). The canonical spelling is always the
/// word itself: reserved words only ever match in lowercase (see
/// [`crate::lexer::identifier`] for the casing diagnostic).
pub static RESERVED_WORDS: &[(&str, TokenKind, &str)] = &[
    ("give", TokenKind::Give, "give"),
    ("express", TokenKind::Express, "express"),
    ("overshare", TokenKind::Overshare, "overshare"),
    ("dear", TokenKind::Dear, "dear"),
    ("dearest", TokenKind::Dearest, "dearest"),
    ("rant", TokenKind::Rant, "rant"),
    ("status", TokenKind::Status, "status"),
    ("forever", TokenKind::Forever, "forever"),
    ("more", TokenKind::More, "more"),
    ("forevermore", TokenKind::Forevermore, "forevermore"),
    ("choose", TokenKind::Choose, "choose"),
    ("phase", TokenKind::Phase, "phase"),
    ("bareminimum", TokenKind::Bareminimum, "bareminimum"),
    ("for", TokenKind::For, "for"),
    ("while", TokenKind::While, "while"),
    ("pursue", TokenKind::Pursue, "pursue"),
    ("breakup", TokenKind::Breakup, "breakup"),
    ("moveon", TokenKind::Moveon, "moveon"),
    ("comeback", TokenKind::Comeback, "comeback"),
    ("love", TokenKind::Love, "love"),
    ("periodt", TokenKind::Periodt, "periodt"),
    ("const", TokenKind::Const, "const"),
    ("boundaries", TokenKind::Boundaries, "boundaries"),
    ("greenflag", TokenKind::BoolLiteralTrue, "greenflag"),
    ("redflag", TokenKind::BoolLiteralFalse, "redflag"),
];

/// Looks up a reserved word by its exact (case-sensitive) spelling.
pub fn lookup_reserved(word: &str) -> Option<(TokenKind, &'static str)> {
    RESERVED_WORDS
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|(_, kind, canonical)| (*kind, *canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reserved_matches_exact_case() {
        assert_eq!(lookup_reserved("love"), Some((TokenKind::Love, "love")));
        assert_eq!(lookup_reserved("Love"), None);
        assert_eq!(lookup_reserved("loveyou"), None);
    }

    #[test]
    fn every_reserved_word_is_lowercase() {
        for (word, _, canonical) in RESERVED_WORDS {
            assert_eq!(*word, word.to_lowercase());
            assert_eq!(word, canonical);
        }
    }

    #[test]
    fn avoidant_is_not_a_token_kind() {
        assert!(lookup_reserved("avoidant").is_none());
    }
}
