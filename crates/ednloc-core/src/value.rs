//! Decoded EDN values
//!
//! Converts a resolved CST subtree back into structured data. Decoding is
//! structural (it walks the tree, it does not re-lex), trivia decode to
//! nothing, and any malformed literal yields `None` instead of an error:
//! per the error taxonomy a value that cannot be decoded is ordinary
//! absence, and the enclosing `Location` is still produced.

use serde::Serialize;

use crate::cst::EdnSyntaxKind;
use crate::cursor::Cursor;
use crate::resolve::is_call_form;

/// A decoded EDN value
///
/// Maps keep their (key, value) pairs in source order; EDN permits keys that
/// are not hashable in the usual sense, so no map container is imposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Keyword name without the leading colon
    Keyword(String),
    Symbol(String),
    Char(char),
    List(Vec<Value>),
    Vector(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Decode the subtree under `cursor`
    ///
    /// Trivia and delimiters decode to `None`, as does anything malformed
    /// (error tokens, maps with an odd number of forms, unparseable
    /// literals).
    pub fn decode(cursor: &Cursor) -> Option<Value> {
        match cursor.kind() {
            EdnSyntaxKind::Map => {
                let elements: Vec<Cursor> = cursor.collection_elements().collect();
                if elements.len() % 2 != 0 {
                    return None;
                }
                let mut pairs = Vec::with_capacity(elements.len() / 2);
                for pair in elements.chunks(2) {
                    pairs.push((Self::decode(&pair[0])?, Self::decode(&pair[1])?));
                }
                Some(Value::Map(pairs))
            }
            EdnSyntaxKind::Vector => Self::decode_elements(cursor).map(Value::Vector),
            EdnSyntaxKind::List => Self::decode_elements(cursor).map(Value::List),
            EdnSyntaxKind::Set => Self::decode_elements(cursor).map(Value::Set),

            EdnSyntaxKind::String => unescape_string(&cursor.text()).map(Value::Str),
            EdnSyntaxKind::Integer => cursor.text().parse::<i64>().ok().map(Value::Int),
            EdnSyntaxKind::Decimal => cursor.text().parse::<f64>().ok().map(Value::Float),
            EdnSyntaxKind::True => Some(Value::Bool(true)),
            EdnSyntaxKind::False => Some(Value::Bool(false)),
            EdnSyntaxKind::Nil => Some(Value::Nil),
            EdnSyntaxKind::Keyword => cursor.keyword_name().map(Value::Keyword),
            EdnSyntaxKind::Symbol => Some(Value::Symbol(cursor.text())),
            EdnSyntaxKind::Char => decode_char(&cursor.text()),

            // Trivia, delimiters, error tokens, the root itself
            _ => None,
        }
    }

    /// Decode the value for a cursor returned by path resolution
    ///
    /// Resolution leaves the cursor on the *key* token inside maps and
    /// call-forms; what callers want decoded is the paired value, so that is
    /// targeted first, falling back to the cursor's own node only when no
    /// paired value exists. A paired value that fails to decode is `None`,
    /// not a fallback to the key.
    pub fn for_resolved(cursor: &Cursor) -> Option<Value> {
        let keyed_parent = cursor
            .parent()
            .map(|parent| parent.is_map() || is_call_form(&parent))
            .unwrap_or(false);
        if keyed_parent {
            if let Some(paired) = cursor.next_meaningful() {
                return Self::decode(&paired);
            }
        }
        Self::decode(cursor)
    }

    fn decode_elements(cursor: &Cursor) -> Option<Vec<Value>> {
        cursor
            .collection_elements()
            .map(|element| Self::decode(&element))
            .collect()
    }
}

/// Decode a quoted string literal, processing escapes
///
/// `None` for anything that is not a well-formed quoted string or that
/// contains an unknown escape.
pub(crate) fn unescape_string(text: &str) -> Option<String> {
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            _ => return None,
        }
    }
    Some(out)
}

/// Decode a character literal such as `\a`, `\newline`, `\space`
fn decode_char(text: &str) -> Option<Value> {
    let name = text.strip_prefix('\\')?;
    let c = match name {
        "newline" => '\n',
        "space" => ' ',
        "tab" => '\t',
        "return" => '\r',
        _ => {
            let mut chars = name.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            first
        }
    };
    Some(Value::Char(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::parse_edn;
    use crate::resolve::{PathSegment, resolve_path};

    fn first_form(source: &str) -> Cursor {
        let (cst, _, _) = parse_edn(source);
        Cursor::from_node(cst)
            .first_child()
            .expect("first child")
            .siblings_rightward()
            .next()
            .expect("meaningful form")
    }

    #[test]
    fn decodes_atoms() {
        assert_eq!(Value::decode(&first_form("42")), Some(Value::Int(42)));
        assert_eq!(Value::decode(&first_form("-3.5")), Some(Value::Float(-3.5)));
        assert_eq!(Value::decode(&first_form("true")), Some(Value::Bool(true)));
        assert_eq!(Value::decode(&first_form("nil")), Some(Value::Nil));
        assert_eq!(
            Value::decode(&first_form(":deps")),
            Some(Value::Keyword("deps".into()))
        );
        assert_eq!(
            Value::decode(&first_form("lib/name")),
            Some(Value::Symbol("lib/name".into()))
        );
        assert_eq!(
            Value::decode(&first_form("\"a\\nb\"")),
            Some(Value::Str("a\nb".into()))
        );
        assert_eq!(
            Value::decode(&first_form("\\newline")),
            Some(Value::Char('\n'))
        );
    }

    #[test]
    fn decodes_collections_structurally() {
        assert_eq!(
            Value::decode(&first_form("[1 2 3]")),
            Some(Value::Vector(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3)
            ]))
        );
        assert_eq!(
            Value::decode(&first_form("{:a 1, :b [true]} ; tail")),
            Some(Value::Map(vec![
                (Value::Keyword("a".into()), Value::Int(1)),
                (
                    Value::Keyword("b".into()),
                    Value::Vector(vec![Value::Bool(true)])
                ),
            ]))
        );
        assert_eq!(
            Value::decode(&first_form("#{1}")),
            Some(Value::Set(vec![Value::Int(1)]))
        );
    }

    #[test]
    fn malformed_literals_decode_to_none() {
        // odd number of map forms
        assert_eq!(Value::decode(&first_form("{:a}")), None);
        // unknown escape
        assert_eq!(Value::decode(&first_form("\"bad \\q escape\"")), None);
        // integer overflow
        assert_eq!(
            Value::decode(&first_form("99999999999999999999999999")),
            None
        );
    }

    #[test]
    fn resolved_key_decodes_its_paired_value() {
        let map = first_form("{:a 1 :b 2}");
        let key = resolve_path(&map, &[PathSegment::key("b")]).expect(":b");
        assert_eq!(Value::for_resolved(&key), Some(Value::Int(2)));
    }

    #[test]
    fn resolved_key_without_value_falls_back_to_itself() {
        let map = first_form("{:a 1 :b}");
        let key = resolve_path(&map, &[PathSegment::key("b")]).expect(":b");
        assert_eq!(Value::for_resolved(&key), Some(Value::Keyword("b".into())));
    }

    #[test]
    fn resolved_sequence_element_decodes_itself() {
        let vector = first_form("[10 20 30]");
        let element = resolve_path(&vector, &[PathSegment::index(2)]).expect("30");
        assert_eq!(Value::for_resolved(&element), Some(Value::Int(30)));
    }

    #[test]
    fn call_form_value_extraction() {
        let form = first_form("(defproject demo \"1.0\" :deps [[lib \"0.1\"]])");
        let key = resolve_path(&form, &[PathSegment::key("deps")]).expect(":deps");
        assert_eq!(
            Value::for_resolved(&key),
            Some(Value::Vector(vec![Value::Vector(vec![
                Value::Symbol("lib".into()),
                Value::Str("0.1".into()),
            ])]))
        );
    }

    #[test]
    fn unescape_rejects_unterminated() {
        assert_eq!(unescape_string("\"abc"), None);
        assert_eq!(unescape_string("plain"), None);
        assert_eq!(unescape_string("\"ok\""), Some("ok".into()));
    }
}
