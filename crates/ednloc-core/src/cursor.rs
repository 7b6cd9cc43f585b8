//! Immutable cursor over the EDN CST
//!
//! A [`Cursor`] is a navigational handle over a node *or* token. Trivia are
//! tokens in the Rowan tree, so cursors work in terms of
//! [`EdnSyntaxElement`]; that way a traversal can observe (or skip) every
//! whitespace, newline and comment byte.
//!
//! All movement operations return new cursors; the underlying tree is shared
//! structurally and never mutated, so creating one cursor never invalidates
//! another and independent traversals need no coordination.

use rowan::NodeOrToken;

use crate::cst::{EdnSyntaxElement, EdnSyntaxKind, EdnSyntaxNode};

/// An immutable handle into the CST
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(EdnSyntaxElement);

impl Cursor {
    pub fn new(element: EdnSyntaxElement) -> Self {
        Self(element)
    }

    pub fn from_node(node: EdnSyntaxNode) -> Self {
        Self(NodeOrToken::Node(node))
    }

    /// The underlying node-or-token
    pub fn element(&self) -> &EdnSyntaxElement {
        &self.0
    }

    pub fn kind(&self) -> EdnSyntaxKind {
        match &self.0 {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        }
    }

    /// Byte range of this element in the source
    pub fn text_range(&self) -> rowan::TextRange {
        match &self.0 {
            NodeOrToken::Node(node) => node.text_range(),
            NodeOrToken::Token(token) => token.text_range(),
        }
    }

    /// Source text covered by this element (lossless)
    pub fn text(&self) -> String {
        match &self.0 {
            NodeOrToken::Node(node) => node.text().to_string(),
            NodeOrToken::Token(token) => token.text().to_string(),
        }
    }

    // ==================
    // Single-step movement
    // ==================

    pub fn parent(&self) -> Option<Cursor> {
        match &self.0 {
            NodeOrToken::Node(node) => node.parent().map(Cursor::from_node),
            NodeOrToken::Token(token) => token.parent().map(Cursor::from_node),
        }
    }

    pub fn next_sibling(&self) -> Option<Cursor> {
        match &self.0 {
            NodeOrToken::Node(node) => node.next_sibling_or_token().map(Cursor::new),
            NodeOrToken::Token(token) => token.next_sibling_or_token().map(Cursor::new),
        }
    }

    pub fn prev_sibling(&self) -> Option<Cursor> {
        match &self.0 {
            NodeOrToken::Node(node) => node.prev_sibling_or_token().map(Cursor::new),
            NodeOrToken::Token(token) => token.prev_sibling_or_token().map(Cursor::new),
        }
    }

    /// First child element; `None` for tokens
    pub fn first_child(&self) -> Option<Cursor> {
        match &self.0 {
            NodeOrToken::Node(node) => node.first_child_or_token().map(Cursor::new),
            NodeOrToken::Token(_) => None,
        }
    }

    /// Next element in document order (pre-order with backtracking)
    pub fn next_preorder(&self) -> Option<Cursor> {
        if let Some(child) = self.first_child() {
            return Some(child);
        }
        let mut current = self.clone();
        loop {
            if let Some(sibling) = current.next_sibling() {
                return Some(sibling);
            }
            current = current.parent()?;
        }
    }

    // ==================
    // Directional walks
    // ==================

    /// Lazy, finite walk: this cursor, then repeated applications of `step`
    /// until it yields nothing
    ///
    /// Each call starts fresh from `self`; the iterator is bounded by the
    /// tree size.
    pub fn walk<F>(&self, step: F) -> impl Iterator<Item = Cursor> + use<F>
    where
        F: Fn(&Cursor) -> Option<Cursor>,
    {
        std::iter::successors(Some(self.clone()), move |cursor| step(cursor))
    }

    /// First cursor along `step` satisfying `pred`, if any
    pub fn walk_find<F, P>(&self, step: F, pred: P) -> Option<Cursor>
    where
        F: Fn(&Cursor) -> Option<Cursor>,
        P: Fn(&Cursor) -> bool,
    {
        self.walk(step).find(|cursor| pred(cursor))
    }

    /// The document root above this cursor
    ///
    /// For a detached subtree with no `Root` node the outermost ancestor is
    /// returned instead.
    pub fn to_root(&self) -> Cursor {
        let mut current = self.clone();
        loop {
            if current.is_root() {
                return current;
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// First element in document order (from this cursor, inclusive)
    /// satisfying `pred`
    pub fn find_first<P>(&self, pred: P) -> Option<Cursor>
    where
        P: Fn(&Cursor) -> bool,
    {
        self.walk(|cursor| cursor.next_preorder())
            .find(|cursor| pred(cursor))
    }

    /// Rightward siblings (this cursor included) with trivia filtered out,
    /// preserving relative order
    pub fn siblings_rightward(&self) -> impl Iterator<Item = Cursor> + use<> {
        self.walk(|cursor| cursor.next_sibling())
            .filter(|cursor| !cursor.is_insignificant())
    }

    /// Semantically meaningful children of a collection node, delimiters
    /// excluded
    ///
    /// Empty for tokens and for nodes without children.
    pub fn collection_elements(&self) -> impl Iterator<Item = Cursor> {
        self.first_child().into_iter().flat_map(|first| {
            first
                .siblings_rightward()
                .skip(1) // the opening delimiter
                .take_while(|cursor| !cursor.kind().is_close_delim())
        })
    }

    /// Next meaningful sibling, stopping at the enclosing closing delimiter
    ///
    /// For a map key this is the paired value position.
    pub fn next_meaningful(&self) -> Option<Cursor> {
        self.siblings_rightward()
            .skip(1) // self
            .take_while(|cursor| !cursor.kind().is_close_delim())
            .next()
    }

    // ==================
    // Classification
    // ==================

    pub fn is_root(&self) -> bool {
        self.kind() == EdnSyntaxKind::Root
    }

    pub fn is_map(&self) -> bool {
        self.kind() == EdnSyntaxKind::Map
    }

    pub fn is_set(&self) -> bool {
        self.kind() == EdnSyntaxKind::Set
    }

    pub fn is_list(&self) -> bool {
        self.kind() == EdnSyntaxKind::List
    }

    pub fn is_vector(&self) -> bool {
        self.kind() == EdnSyntaxKind::Vector
    }

    /// Map, list or vector -- the kinds path resolution can walk through
    pub fn is_collection(&self) -> bool {
        self.is_map() || self.is_list() || self.is_vector()
    }

    pub fn is_symbol(&self) -> bool {
        self.kind() == EdnSyntaxKind::Symbol
    }

    pub fn is_keyword(&self) -> bool {
        self.kind() == EdnSyntaxKind::Keyword
    }

    /// Whitespace, newline or comment
    pub fn is_insignificant(&self) -> bool {
        self.kind().is_trivia()
    }

    /// Keyword name without the leading colon, for keyword tokens
    pub fn keyword_name(&self) -> Option<String> {
        if self.is_keyword() {
            Some(self.text().trim_start_matches(':').to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::parse_edn;

    fn root_cursor(source: &str) -> Cursor {
        let (cst, _, _) = parse_edn(source);
        Cursor::from_node(cst)
    }

    #[test]
    fn parent_child_and_sibling_steps() {
        let root = root_cursor("{:a 1}");
        let map = root.first_child().expect("map");
        assert!(map.is_map());

        let open = map.first_child().expect("open brace");
        assert_eq!(open.kind(), EdnSyntaxKind::LBrace);

        let key = open.next_sibling().expect("key");
        assert_eq!(key.kind(), EdnSyntaxKind::Keyword);
        assert_eq!(key.prev_sibling(), Some(open));
        assert_eq!(key.parent(), Some(map));
    }

    #[test]
    fn walk_is_restartable_and_finite() {
        let root = root_cursor("[1 2 3]");
        let vector = root.first_child().expect("vector");
        let first = vector.first_child().expect("bracket");

        let one: Vec<_> = first.walk(|c| c.next_sibling()).collect();
        let two: Vec<_> = first.walk(|c| c.next_sibling()).collect();
        assert_eq!(one, two);
        // [ 1 _ 2 _ 3 ]  (trivia included in a raw walk)
        assert_eq!(one.len(), 7);
    }

    #[test]
    fn siblings_rightward_skips_trivia() {
        let root = root_cursor("[1 ; note\n 2]");
        let vector = root.first_child().expect("vector");
        let first = vector.first_child().expect("bracket");

        let kinds: Vec<_> = first.siblings_rightward().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EdnSyntaxKind::LBracket,
                EdnSyntaxKind::Integer,
                EdnSyntaxKind::Integer,
                EdnSyntaxKind::RBracket,
            ]
        );
    }

    #[test]
    fn collection_elements_excludes_delimiters() {
        let root = root_cursor("{:a 1, :b 2}");
        let map = root.first_child().expect("map");
        let texts: Vec<_> = map.collection_elements().map(|c| c.text()).collect();
        assert_eq!(texts, vec![":a", "1", ":b", "2"]);
    }

    #[test]
    fn walk_find_locates_enclosing_collection() {
        let root = root_cursor("{:a [1 2]}");
        let one = root
            .find_first(|c| c.kind() == EdnSyntaxKind::Integer)
            .expect("1");
        let vector = one
            .walk_find(|c| c.parent(), |c| c.is_collection())
            .expect("vector");
        assert!(vector.is_vector());

        let map = vector
            .walk_find(|c| c.parent(), |c| c.is_map())
            .expect("map");
        assert_eq!(map.text(), "{:a [1 2]}");
    }

    #[test]
    fn to_root_from_deep_cursor() {
        let root = root_cursor("{:a {:b 1}}");
        let deep = root
            .find_first(|c| c.kind() == EdnSyntaxKind::Integer)
            .expect("integer");
        assert!(deep.to_root().is_root());
        assert_eq!(deep.to_root(), root);
    }

    #[test]
    fn preorder_visits_document_order() {
        let root = root_cursor("{:a [1]}");
        let texts: Vec<_> = root
            .walk(|c| c.next_preorder())
            .filter(|c| c.first_child().is_none()) // tokens only
            .map(|c| c.text())
            .collect();
        assert_eq!(texts.concat(), "{:a [1]}");
    }

    #[test]
    fn next_meaningful_finds_paired_value() {
        let root = root_cursor("{:a 1 :b 2}");
        let key_b = root
            .find_first(|c| c.is_keyword() && c.text() == ":b")
            .expect(":b");
        let value = key_b.next_meaningful().expect("value");
        assert_eq!(value.text(), "2");
    }

    #[test]
    fn next_meaningful_stops_at_closing_delimiter() {
        let root = root_cursor("{:a 1}");
        let one = root
            .find_first(|c| c.kind() == EdnSyntaxKind::Integer)
            .expect("1");
        assert_eq!(one.next_meaningful(), None);
    }

    #[test]
    fn keyword_name_strips_colon() {
        let root = root_cursor("{:deps 1}");
        let key = root.find_first(|c| c.is_keyword()).expect("keyword");
        assert_eq!(key.keyword_name().as_deref(), Some("deps"));
    }
}
