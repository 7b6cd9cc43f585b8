//! Rowan language implementation for EDN
//!
//! Connects [`EdnSyntaxKind`] to Rowan's generic CST infrastructure.

use rowan::Language;

use super::EdnSyntaxKind;

/// Language implementation for EDN documents
///
/// A zero-sized type that implements `rowan::Language` to bridge our syntax
/// kinds and Rowan's generic tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdnLanguage;

impl Language for EdnLanguage {
    type Kind = EdnSyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        // We control the raw values; the match validates every expected one.
        match raw.0 {
            // Trivia
            0 => EdnSyntaxKind::Whitespace,
            1 => EdnSyntaxKind::CommentLine,
            2 => EdnSyntaxKind::Newline,

            // Delimiters (100-119)
            100 => EdnSyntaxKind::LBrace,
            101 => EdnSyntaxKind::RBrace,
            102 => EdnSyntaxKind::LBracket,
            103 => EdnSyntaxKind::RBracket,
            104 => EdnSyntaxKind::LParen,
            105 => EdnSyntaxKind::RParen,
            106 => EdnSyntaxKind::HashLBrace,

            // Literals & identifiers (150-169)
            150 => EdnSyntaxKind::Keyword,
            151 => EdnSyntaxKind::Symbol,
            152 => EdnSyntaxKind::String,
            153 => EdnSyntaxKind::Integer,
            154 => EdnSyntaxKind::Decimal,
            155 => EdnSyntaxKind::True,
            156 => EdnSyntaxKind::False,
            157 => EdnSyntaxKind::Nil,
            158 => EdnSyntaxKind::Char,

            // Structure nodes (200-219)
            200 => EdnSyntaxKind::Root,
            201 => EdnSyntaxKind::Map,
            202 => EdnSyntaxKind::Vector,
            203 => EdnSyntaxKind::List,
            204 => EdnSyntaxKind::Set,

            // Specials (400+)
            400 => EdnSyntaxKind::Error,
            401 => EdnSyntaxKind::Eof,
            402 => EdnSyntaxKind::Unknown,

            _ => {
                tracing::warn!("unknown syntax kind: {}", raw.0);
                EdnSyntaxKind::Unknown
            }
        }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        let kinds = [
            EdnSyntaxKind::Whitespace,
            EdnSyntaxKind::Newline,
            EdnSyntaxKind::LBrace,
            EdnSyntaxKind::Keyword,
            EdnSyntaxKind::Map,
            EdnSyntaxKind::Set,
            EdnSyntaxKind::Error,
        ];

        for &kind in &kinds {
            let raw = EdnLanguage::kind_to_raw(kind);
            let back = EdnLanguage::kind_from_raw(raw);
            assert_eq!(kind, back, "roundtrip failed for {kind:?}");
        }
    }

    #[test]
    fn kind_values() {
        assert_eq!(EdnLanguage::kind_to_raw(EdnSyntaxKind::Whitespace).0, 0);
        assert_eq!(EdnLanguage::kind_to_raw(EdnSyntaxKind::LBrace).0, 100);
        assert_eq!(EdnLanguage::kind_to_raw(EdnSyntaxKind::Keyword).0, 150);
        assert_eq!(EdnLanguage::kind_to_raw(EdnSyntaxKind::Root).0, 200);
    }
}
