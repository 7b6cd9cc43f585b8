//! Syntax kind enumeration for the EDN CST
//!
//! This module defines all possible node and token types in the EDN syntax
//! tree. It includes:
//! - Trivia (whitespace, newlines, comments)
//! - Delimiters and literal tokens
//! - Structural nodes (maps, vectors, lists, sets)

use std::fmt;

/// Syntax kind for EDN language elements
///
/// The discriminants are grouped in bands so that raw kinds stay stable when
/// new members are added:
/// - Trivia: 0-9
/// - Delimiters: 100-119
/// - Literals and identifiers: 150-169
/// - Structure nodes: 200-219
/// - Specials: 400+
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum EdnSyntaxKind {
    // ==================
    // Trivia (0-9)
    // ==================
    /// Whitespace run (spaces, tabs, commas -- commas are whitespace in EDN)
    Whitespace = 0,
    /// Line comment starting with `;`, up to but not including the newline
    CommentLine = 1,
    /// One newline (`\n`, `\r\n`, or a lone `\r`)
    Newline = 2,

    // ==================
    // Delimiters (100-119)
    // ==================
    /// `{`
    LBrace = 100,
    /// `}`
    RBrace = 101,
    /// `[`
    LBracket = 102,
    /// `]`
    RBracket = 103,
    /// `(`
    LParen = 104,
    /// `)`
    RParen = 105,
    /// `#{` (set opener)
    HashLBrace = 106,

    // ==================
    // Literals & identifiers (150-169)
    // ==================
    /// Keyword such as `:deps` or `:ns/name`
    Keyword = 150,
    /// Symbol such as `defproject`
    Symbol = 151,
    /// Double-quoted string literal
    String = 152,
    /// Integer literal
    Integer = 153,
    /// Decimal literal (fraction or exponent present)
    Decimal = 154,
    /// `true`
    True = 155,
    /// `false`
    False = 156,
    /// `nil`
    Nil = 157,
    /// Character literal such as `\a` or `\newline`
    Char = 158,

    // ==================
    // Structure nodes (200-219)
    // ==================
    /// Document root
    Root = 200,
    /// Map `{...}`
    Map = 201,
    /// Vector `[...]`
    Vector = 202,
    /// List `(...)`
    List = 203,
    /// Set `#{...}`
    Set = 204,

    // ==================
    // Specials (400+)
    // ==================
    /// Token that could not be classified; its text is still preserved
    Error = 400,
    /// End of file marker
    Eof = 401,
    /// Raw kind that does not map to any known member
    Unknown = 402,
}

impl EdnSyntaxKind {
    /// Whether this kind is trivia (non-semantic, preserved for round-trips)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::CommentLine | Self::Newline)
    }

    /// Whether this kind is a structure node rather than a token
    pub fn is_node(self) -> bool {
        matches!(
            self,
            Self::Root | Self::Map | Self::Vector | Self::List | Self::Set
        )
    }

    /// Whether this kind opens a collection
    pub fn is_open_delim(self) -> bool {
        matches!(
            self,
            Self::LBrace | Self::LBracket | Self::LParen | Self::HashLBrace
        )
    }

    /// Whether this kind closes a collection
    pub fn is_close_delim(self) -> bool {
        matches!(self, Self::RBrace | Self::RBracket | Self::RParen)
    }

    /// The node kind produced by an opening delimiter
    pub fn collection_kind(self) -> Option<EdnSyntaxKind> {
        match self {
            Self::LBrace => Some(Self::Map),
            Self::LBracket => Some(Self::Vector),
            Self::LParen => Some(Self::List),
            Self::HashLBrace => Some(Self::Set),
            _ => None,
        }
    }

    /// The closing delimiter matching an opening delimiter
    pub fn matching_close(self) -> Option<EdnSyntaxKind> {
        match self {
            Self::LBrace | Self::HashLBrace => Some(Self::RBrace),
            Self::LBracket => Some(Self::RBracket),
            Self::LParen => Some(Self::RParen),
            _ => None,
        }
    }
}

impl fmt::Display for EdnSyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<EdnSyntaxKind> for rowan::SyntaxKind {
    fn from(kind: EdnSyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_classification() {
        assert!(EdnSyntaxKind::Whitespace.is_trivia());
        assert!(EdnSyntaxKind::CommentLine.is_trivia());
        assert!(EdnSyntaxKind::Newline.is_trivia());
        assert!(!EdnSyntaxKind::Keyword.is_trivia());
        assert!(!EdnSyntaxKind::LBrace.is_trivia());
    }

    #[test]
    fn node_classification() {
        assert!(EdnSyntaxKind::Map.is_node());
        assert!(EdnSyntaxKind::Root.is_node());
        assert!(!EdnSyntaxKind::Keyword.is_node());
        assert!(!EdnSyntaxKind::RBrace.is_node());
    }

    #[test]
    fn delimiter_pairing() {
        assert_eq!(
            EdnSyntaxKind::LBrace.matching_close(),
            Some(EdnSyntaxKind::RBrace)
        );
        assert_eq!(
            EdnSyntaxKind::HashLBrace.matching_close(),
            Some(EdnSyntaxKind::RBrace)
        );
        assert_eq!(
            EdnSyntaxKind::LParen.collection_kind(),
            Some(EdnSyntaxKind::List)
        );
        assert_eq!(EdnSyntaxKind::RParen.collection_kind(), None);
    }
}
