//! Tests for CST construction and the lossless invariant

use super::*;
use rowan::GreenNodeBuilder;

/// Build `{:a 1}` by hand and check structure plus lossless text
#[test]
fn hand_built_map_cst() {
    let mut builder = GreenNodeBuilder::new();

    builder.start_node(EdnSyntaxKind::Root.into());
    builder.start_node(EdnSyntaxKind::Map.into());
    builder.token(EdnSyntaxKind::LBrace.into(), "{");
    builder.token(EdnSyntaxKind::Keyword.into(), ":a");
    builder.token(EdnSyntaxKind::Whitespace.into(), " ");
    builder.token(EdnSyntaxKind::Integer.into(), "1");
    builder.token(EdnSyntaxKind::RBrace.into(), "}");
    builder.finish_node();
    builder.finish_node();

    let root = EdnSyntaxNode::new_root(builder.finish());
    assert_eq!(root.kind(), EdnSyntaxKind::Root);

    let map = root.first_child().expect("map child");
    assert_eq!(map.kind(), EdnSyntaxKind::Map);
    assert_eq!(map.text().to_string(), "{:a 1}");
}

/// The parsed CST preserves comments
#[test]
fn cst_preserves_comments() {
    let source = "{:a 1} ; trailing note";
    let (cst, _, _) = parse_edn(source);
    assert_eq!(cst.text().to_string(), source);

    let comment = cst
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == EdnSyntaxKind::CommentLine)
        .expect("comment token");
    assert_eq!(comment.text(), "; trailing note");
}

/// The parsed CST preserves every whitespace byte
#[test]
fn cst_preserves_whitespace() {
    let source = "{  :a\t1 ,, :b 2  }\n\n";
    let (cst, _, _) = parse_edn(source);
    assert_eq!(cst.text().to_string(), source);
}

/// Token-level traversal sees delimiters and trivia in order
#[test]
fn cst_traversal_with_tokens() {
    let (cst, _, _) = parse_edn("[1 2]");
    let vector = cst.first_child().expect("vector");

    let kinds: Vec<_> = vector
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .map(|t| t.kind())
        .collect();

    assert_eq!(
        kinds,
        vec![
            EdnSyntaxKind::LBracket,
            EdnSyntaxKind::Integer,
            EdnSyntaxKind::Whitespace,
            EdnSyntaxKind::Integer,
            EdnSyntaxKind::RBracket,
        ]
    );
}

/// Concatenating every token depth-first reproduces the source byte-for-byte
#[test]
fn round_trip_over_token_stream() {
    let source = "(defproject sample \"0.2.0\"\r\n  :description \"demo\"\n  :deps [[a \"1\"] [b \"2\"]]\n  ; done\n)";
    let (cst, _, _) = parse_edn(source);

    let rebuilt: String = cst
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(rebuilt, source);
}

/// Trimmed text helper strips surrounding trivia only
#[test]
fn trimmed_text_helper() {
    let (cst, _, _) = parse_edn("  {:a 1}  ");
    assert_eq!(cst.trimmed_text(), "{:a 1}");
    assert_eq!(cst.text().to_string(), "  {:a 1}  ");
}
