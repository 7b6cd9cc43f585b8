//! Concrete Syntax Tree (CST) for EDN documents
//!
//! A lossless syntax tree built on the Rowan library. The CST preserves all
//! source information, including whitespace, commas, newlines and comments,
//! which is what makes path-to-source-location resolution possible: every
//! semantic position in the decoded data still has its exact bytes in the
//! tree.
//!
//! ## Architecture
//!
//! Rowan's green/red tree pattern:
//!
//! - **Green tree**: immutable, position-independent storage of the source
//!   text with trivia; cheap to clone (Arc internally), identical subtrees
//!   are deduplicated.
//! - **Red tree**: a view with parent pointers constructed on demand, used
//!   for parent/sibling/child navigation.
//!
//! Both are immutable after parsing; any number of readers may traverse the
//! same tree concurrently.
//!
//! ## Lossless invariant
//!
//! `parse_edn(source).0.text() == source` for every input, malformed input
//! included. Lexer and parser errors are reported on the side; the offending
//! text stays in the tree as `Error` tokens.

mod language;
mod lexer;
mod nodes;
mod parser;
mod syntax_kind;

pub use language::EdnLanguage;
pub use lexer::{CstLexResult, CstSpan, CstToken, LexerError, lex_with_trivia};
pub use nodes::{EdnSyntaxElement, EdnSyntaxNode, EdnSyntaxNodeExt, EdnSyntaxToken};
pub use parser::{ParseError, ParseErrorKind, parse_edn};
pub use syntax_kind::EdnSyntaxKind;

#[cfg(test)]
mod tests;
