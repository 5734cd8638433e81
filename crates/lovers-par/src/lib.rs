//! lovers-par - Syntactic Analyzer
//!
//! A recursive-descent parser over the token stream produced by
//! `lovers-lex`. It is validation-only: there is no AST, no type
//! checking, and no code generation downstream of it. Its job is to
//! walk the grammar, collecting every `ParseError` it finds along the
//! way rather than stopping at the first one, and to resynchronize on
//! `;`/`}` so a single mistake doesn't swallow the rest of the file.
//!
//! Two independent checks live here:
//!
//! - [`structural::validate_structure`]: a light pass over the token
//!   stream confirming it has the shape of a program — optional globals,
//!   exactly one `love` block, nothing left over — without walking the
//!   full expression/statement grammar.
//! - [`Parser`]: the full recursive-descent grammar, described level by
//!   level in the `parser` submodules.

mod error;
mod parser;
pub mod structural;

pub use error::ParseError;
pub use parser::Parser;
pub use structural::{validate_structure, ErrorCode, Verdict};

/// Parses `tokens` against the full grammar, returning whether it parsed
/// clean and every error collected along the way.
pub fn parse(tokens: Vec<lovers_lex::Token>) -> (bool, Vec<ParseError>) {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovers_lex::tokenize;

    #[test]
    fn happy_path_program_parses_clean() {
        let src = "love main() { dear x = 5; express << x << periodt; }";
        let tokens = tokenize(src).unwrap();
        let (ok, errors) = parse(tokens);
        assert!(ok, "unexpected errors: {errors:?}");
    }

    #[test]
    fn structural_and_full_parse_agree_on_a_well_formed_program() {
        let src = "dear total = 0; love main() { for (dear i = 0; i < 10; ++i) { total = total + i; } }";
        let tokens = tokenize(src).unwrap();
        assert!(matches!(
            structural::validate_structure(&tokens),
            Verdict::Ok(_)
        ));
        let (ok, _) = parse(tokens);
        assert!(ok);
    }

    #[test]
    fn parser_recovers_after_an_error_instead_of_aborting() {
        let src = "love main() { dear x = 5 } dear y = 6; love main() { }";
        let tokens = tokenize(src).unwrap();
        let (ok, errors) = parse(tokens);
        assert!(!ok);
        assert!(!errors.is_empty());
    }
}
