//! Follow-set tables: the declarative data behind the lexer's
//! context-sensitive "what may legally come next" check.
//!
//! The tables are expressed as *named* character-set references — sets
//! like `space_del` or `arith_op` that get expanded once into concrete
//! [`CharSet`]s — and built exactly once behind a [`std::sync::OnceLock`].
//! After that first build they are immutable for the remainder of the
//! process, so lookups never take a lock.

use std::collections::HashSet;
use std::sync::OnceLock;

/// A concrete, expanded set of follower characters.
#[derive(Clone, Debug, Default)]
pub struct CharSet(HashSet<char>);

impl CharSet {
    fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self(chars.into_iter().collect())
    }

    fn union(sets: impl IntoIterator<Item = CharSet>) -> Self {
        let mut out = HashSet::new();
        for set in sets {
            out.extend(set.0);
        }
        Self(out)
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

// ---------------------------------------------------------------------
// Named sets, each a reusable building block for the per-word and
// per-operator follow tables below.
// ---------------------------------------------------------------------

fn space_del() -> CharSet {
    CharSet::from_chars([' ', '\t', '\r', '\n'])
}

fn alphabet() -> CharSet {
    CharSet::from_chars(('a'..='z').chain('A'..='Z'))
}

fn digit() -> CharSet {
    CharSet::from_chars('0'..='9')
}

fn alphanum() -> CharSet {
    CharSet::union([alphabet(), digit()])
}

/// Characters that can begin an expression: identifiers, literals,
/// parens, unary operators.
fn expr_start() -> CharSet {
    CharSet::union([
        alphanum(),
        CharSet::from_chars(['(', '-', '+', '!', '"']),
    ])
}

fn arith_op() -> CharSet {
    CharSet::from_chars(['+', '-', '*', '/', '%'])
}

/// A closing brace is followed by whitespace, another letter (the next
/// statement or keyword), or one of the structural characters that
/// commonly trail a block: another brace, a closing paren, a semicolon.
fn brace_close_follow() -> CharSet {
    CharSet::union([
        space_del(),
        alphabet(),
        CharSet::from_chars(['}', ')', ';']),
    ])
}

/// The identifier follow-union: the set of characters legally adjacent
/// to any identifier, reserved word (as a fallback), or numeral. It is
/// deliberately broad — every operator/punctuation starter plus
/// whitespace — since the only thing it rules out is two identifier-like
/// runs abutting with no separator.
fn identifier_follow_union() -> CharSet {
    CharSet::union([
        space_del(),
        CharSet::from_chars([
            ';', ',', ')', ']', '}', '(', '[', '{', '+', '-', '*', '/', '%', '=', '<', '>', '!',
            '&', '|', ':', '.',
        ]),
    ])
}

/// Characters legally following a closed string literal: whitespace, a
/// statement terminator, a closing delimiter, or a concatenation operator.
fn string_close_follow() -> CharSet {
    CharSet::from_chars([' ', '\t', '\n', ';', ')', '<'])
}

struct Tables {
    reserved_word_follows: Vec<(&'static str, CharSet)>,
    reserved_symbol_follows: Vec<(&'static str, CharSet)>,
    identifier_follows: CharSet,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let ident_follow = identifier_follow_union();
        let reserved_word_follows = vec![
            ("give", CharSet::union([space_del(), CharSet::from_chars(['>'])])),
            ("express", CharSet::union([space_del(), CharSet::from_chars(['<'])])),
            ("overshare", CharSet::union([space_del(), CharSet::from_chars(['('])])),
            ("dear", space_del()),
            ("dearest", space_del()),
            ("rant", space_del()),
            ("status", space_del()),
            ("forever", CharSet::union([space_del(), CharSet::from_chars(['('])])),
            ("more", CharSet::union([space_del(), CharSet::from_chars(['{'])])),
            ("forevermore", CharSet::union([space_del(), CharSet::from_chars(['('])])),
            ("choose", CharSet::union([space_del(), CharSet::from_chars(['('])])),
            ("phase", space_del()),
            ("bareminimum", CharSet::union([space_del(), CharSet::from_chars([':'])])),
            ("for", CharSet::union([space_del(), CharSet::from_chars(['('])])),
            ("while", CharSet::union([space_del(), CharSet::from_chars(['('])])),
            ("pursue", CharSet::union([space_del(), CharSet::from_chars(['{'])])),
            ("breakup", CharSet::union([space_del(), CharSet::from_chars([';'])])),
            ("moveon", CharSet::union([space_del(), CharSet::from_chars([';'])])),
            ("comeback", CharSet::union([space_del(), CharSet::from_chars([';'])])),
            ("love", space_del()),
            ("periodt", CharSet::union([space_del(), CharSet::from_chars([';', '<'])])),
            ("const", space_del()),
            ("boundaries", space_del()),
            ("greenflag", ident_follow.clone()),
            ("redflag", ident_follow.clone()),
        ];

        let reserved_symbol_follows = vec![
            ("+", CharSet::union([space_del(), expr_start()])),
            ("-", CharSet::union([space_del(), expr_start()])),
            ("*", CharSet::union([space_del(), expr_start()])),
            ("/", CharSet::union([space_del(), expr_start()])),
            ("%", CharSet::union([space_del(), expr_start()])),
            ("+=", CharSet::union([space_del(), expr_start()])),
            ("-=", CharSet::union([space_del(), expr_start()])),
            ("*=", CharSet::union([space_del(), expr_start()])),
            ("/=", CharSet::union([space_del(), expr_start()])),
            ("%=", CharSet::union([space_del(), expr_start()])),
            ("++", CharSet::union([space_del(), alphanum(), CharSet::from_chars(['('])])),
            ("--", CharSet::union([space_del(), alphanum(), CharSet::from_chars(['('])])),
            ("::", CharSet::union([space_del(), alphabet()])),
            ("->", CharSet::union([space_del(), alphabet()])),
            (",", CharSet::union([space_del(), expr_start()])),
            (":", CharSet::union([space_del(), alphanum(), CharSet::from_chars(['{'])])),
            ("\"", string_close_follow()),
            ("}", brace_close_follow()),
        ];
        let _ = arith_op(); // reserved for future per-operator entries; currently folded into expr_start.

        Tables {
            reserved_word_follows,
            reserved_symbol_follows,
            identifier_follows: ident_follow,
        }
    })
}

/// Operators/punctuation exempt from follow-set validation: assignment,
/// statement terminator, every relational/equality/logical/shift operator,
/// and every bracket/brace/paren.
pub fn is_follow_exempt(lexeme: &str) -> bool {
    matches!(
        lexeme,
        "=" | ";"
            | ">"
            | "<"
            | ">="
            | "<="
            | "=="
            | "!="
            | ">>"
            | "<<"
            | "&&"
            | "||"
            | "("
            | ")"
            | "{"
            | "["
            | "]"
    )
}

/// The follow set declared for a reserved word, falling back to the
/// identifier follow-union when the word has no specific entry.
pub fn reserved_word_follow(word: &str) -> &'static CharSet {
    tables()
        .reserved_word_follows
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, set)| set)
        .unwrap_or(&tables().identifier_follows)
}

/// The follow set declared for an operator/punctuation lexeme, if any.
pub fn reserved_symbol_follow(lexeme: &str) -> Option<&'static CharSet> {
    tables()
        .reserved_symbol_follows
        .iter()
        .find(|(l, _)| *l == lexeme)
        .map(|(_, set)| set)
}

/// The identifier follow-union, also used to validate what may abut a
/// numeral.
pub fn identifier_follows() -> &'static CharSet {
    &tables().identifier_follows
}
