//! Type aliases and helpers for EDN CST nodes
//!
//! These types are Rowan's generic tree types parameterized with
//! [`EdnLanguage`]. Nodes give access to children, parents and the lossless
//! text of their subtree; tokens are the leaves carrying actual source text.

use super::EdnLanguage;

/// A node in the EDN concrete syntax tree
pub type EdnSyntaxNode = rowan::SyntaxNode<EdnLanguage>;

/// A token (leaf) in the EDN concrete syntax tree
pub type EdnSyntaxToken = rowan::SyntaxToken<EdnLanguage>;

/// Either a node or a token
///
/// Trivia (whitespace, newlines, comments) are tokens, so any traversal that
/// must observe them works in terms of elements rather than nodes.
pub type EdnSyntaxElement = rowan::NodeOrToken<EdnSyntaxNode, EdnSyntaxToken>;

/// Convenience helpers shared by node consumers
pub trait EdnSyntaxNodeExt {
    /// Subtree text with surrounding trivia trimmed
    fn trimmed_text(&self) -> String;
}

impl EdnSyntaxNodeExt for EdnSyntaxNode {
    fn trimmed_text(&self) -> String {
        self.text().to_string().trim().to_string()
    }
}
