//! Hierarchical parser for EDN documents
//!
//! Builds a structured CST from the trivia-preserving token stream. Every
//! collection becomes a node whose delimiters are tokens inside the node, so
//! the tree reproduces the source exactly even when the input is malformed.
//!
//! # Example
//!
//! ```rust,ignore
//! use ednloc_core::cst::parse_edn;
//!
//! let source = "{:a 1 :b 2}";
//! let (cst, lexer_errors, parse_errors) = parse_edn(source);
//! assert!(lexer_errors.is_empty() && parse_errors.is_empty());
//! assert_eq!(cst.text().to_string(), source);
//! ```

use rowan::GreenNodeBuilder;

use super::lexer::{CstSpan, CstToken, LexerError, lex_with_trivia};
use super::{EdnSyntaxKind, EdnSyntaxNode};

/// Kinds of structural parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A collection was still open at end of input
    UnclosedDelimiter,
    /// A closing delimiter appeared with no matching opener
    UnexpectedClosingDelimiter,
}

/// A structural parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: CstSpan,
}

impl ParseError {
    fn new(kind: ParseErrorKind, message: impl Into<String>, span: CstSpan) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}

/// Parse EDN source into a lossless CST
///
/// Always returns a tree covering the full input; errors are reported on the
/// side rather than by truncating the tree.
pub fn parse_edn(source: &str) -> (EdnSyntaxNode, Vec<LexerError>, Vec<ParseError>) {
    let (tokens, lexer_errors) = lex_with_trivia(source);
    let mut parser = Parser::new(&tokens);
    parser.parse_document();
    let (cst, parse_errors) = parser.finish();
    (cst, lexer_errors, parse_errors)
}

/// Token stream parser
struct Parser<'a> {
    tokens: &'a [CstToken],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [CstToken]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> (EdnSyntaxNode, Vec<ParseError>) {
        (EdnSyntaxNode::new_root(self.builder.finish()), self.errors)
    }

    fn parse_document(&mut self) {
        self.builder.start_node(EdnSyntaxKind::Root.into());

        while !self.at_end() {
            match self.current_kind() {
                kind if kind.is_open_delim() => self.parse_collection(),
                kind if kind.is_close_delim() => {
                    // Stray closer at the top level
                    self.errors.push(ParseError::new(
                        ParseErrorKind::UnexpectedClosingDelimiter,
                        format!("unexpected `{}`", self.current().text),
                        self.current().span.clone(),
                    ));
                    self.add_current_as(EdnSyntaxKind::Error);
                }
                _ => self.add_current(),
            }
        }

        self.builder.finish_node(); // ROOT
    }

    /// Parse one collection, delimiters included as child tokens
    fn parse_collection(&mut self) {
        let open = self.current_kind();
        let open_span = self.current().span.clone();
        // Callers only dispatch here on open delimiters
        let node_kind = open.collection_kind().unwrap_or(EdnSyntaxKind::Error);
        let close = open.matching_close();

        self.builder.start_node(node_kind.into());
        self.add_current(); // opening delimiter

        loop {
            if self.at_end() {
                self.errors.push(ParseError::new(
                    ParseErrorKind::UnclosedDelimiter,
                    format!("unclosed {node_kind}"),
                    open_span.clone(),
                ));
                break;
            }
            let kind = self.current_kind();
            if Some(kind) == close {
                self.add_current(); // closing delimiter
                break;
            }
            if kind.is_close_delim() {
                // Mismatched closer: keep its text, record the problem
                self.errors.push(ParseError::new(
                    ParseErrorKind::UnexpectedClosingDelimiter,
                    format!("mismatched `{}` inside {node_kind}", self.current().text),
                    self.current().span.clone(),
                ));
                self.add_current_as(EdnSyntaxKind::Error);
                continue;
            }
            if kind.is_open_delim() {
                self.parse_collection();
                continue;
            }
            self.add_current();
        }

        self.builder.finish_node();
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current(&self) -> &CstToken {
        &self.tokens[self.pos]
    }

    fn current_kind(&self) -> EdnSyntaxKind {
        self.tokens[self.pos].kind
    }

    /// Add the current token to the tree as-is and advance
    fn add_current(&mut self) {
        let token = &self.tokens[self.pos];
        self.builder.token(token.kind.into(), &token.text);
        self.pos += 1;
    }

    /// Add the current token under a different kind (text preserved) and advance
    fn add_current_as(&mut self, kind: EdnSyntaxKind) {
        let token = &self.tokens[self.pos];
        self.builder.token(kind.into(), &token.text);
        self.pos += 1;
    }
}
