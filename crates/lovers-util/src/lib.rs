//! lovers-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure used by every stage of the Lovers front end: string
//! interning, source spans, and diagnostic reporting. None of this is
//! language-specific; it is the same kind of scaffolding any hand-written
//! lexer/parser pair needs before it can report a useful error message.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, Span};
pub use symbol::Symbol;
