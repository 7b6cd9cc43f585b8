//! Path resolution over the EDN CST
//!
//! Walks a logical path (key and index segments) through a parsed document
//! and returns the cursor for the matched source position. Dispatch is by
//! node kind:
//!
//! - **Maps**: meaningful children are grouped into (key, value) pairs; the
//!   key cursor of the first matching pair wins.
//! - **Vectors / lists**: zero-based index lookup over meaningful elements.
//! - **Call-forms** (`(defproject name "version" :key value ...)`): keyword
//!   segments search the trailing keyword/value region; index segments index
//!   the whole form, leading symbol included.
//! - **Sets**: unsupported, resolution yields `None` (an unordered literal
//!   has no position a key or index could name).
//!
//! All data-dependent failures are `None`, never an error: a missing key, an
//! out-of-range index and a set node are ordinary outcomes for a caller to
//! check. Supplying a non-index segment to a plain sequence is a programmer
//! error and panics.

use serde::Serialize;
use tracing::trace;

use crate::cursor::Cursor;
use crate::value::unescape_string;

/// The distinguished symbol opening a call-like top-level form
pub const CALL_FORM_SYMBOL: &str = "defproject";

/// One element of a logical path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathSegment {
    /// Symbolic key: matches keyword tokens by name (`:deps` for `Key("deps")`)
    /// and symbol tokens by text
    Key(String),
    /// String key: matches string literals by decoded content
    Str(String),
    /// Zero-based sequence index
    Index(usize),
}

impl PathSegment {
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Whether `cursor` is a key node equal to this segment by decoded
    /// textual identity
    pub fn matches(&self, cursor: &Cursor) -> bool {
        match self {
            Self::Key(name) => {
                if let Some(keyword) = cursor.keyword_name() {
                    keyword == *name
                } else {
                    cursor.is_symbol() && cursor.text() == *name
                }
            }
            Self::Str(value) => {
                cursor.kind() == crate::cst::EdnSyntaxKind::String
                    && unescape_string(&cursor.text()).as_deref() == Some(value)
            }
            Self::Index(_) => false,
        }
    }
}

/// An ordered, non-empty sequence of path segments, shallowest first
pub type KeyPath = Vec<PathSegment>;

/// One resolution step: the matched key position and, where one exists, the
/// value position to descend into
struct Resolved {
    target: Cursor,
    descend: Option<Cursor>,
}

/// Resolve a full path from `start`
///
/// Intermediate segments resolve to the *value* at the key or index before
/// the next segment is applied. The final segment resolves to the *key*
/// cursor when the enclosing node is a map or call-form (so callers can
/// report on the key token) and to the element cursor inside sequences.
/// Any segment that fails to resolve aborts the whole resolution with
/// `None`; there are no partial results.
///
/// # Panics
///
/// Panics when a non-index segment is applied to a plain vector or list;
/// that is a contract violation by the caller, not data absence.
pub fn resolve_path(start: &Cursor, path: &[PathSegment]) -> Option<Cursor> {
    if path.is_empty() {
        return None;
    }

    let mut current = start.clone();
    for (depth, segment) in path.iter().enumerate() {
        let step = resolve_step(&current, segment)?;
        if depth + 1 == path.len() {
            return Some(step.target);
        }
        current = step.descend?;
    }
    unreachable!("loop returns on the final segment")
}

/// Resolve one segment against the node under `cursor`
fn resolve_step(cursor: &Cursor, segment: &PathSegment) -> Option<Resolved> {
    trace!(kind = %cursor.kind(), ?segment, "resolve step");

    if cursor.is_map() {
        return resolve_in_map(cursor, segment);
    }
    if cursor.is_vector() || cursor.is_list() {
        if is_call_form(cursor) && !matches!(segment, PathSegment::Index(_)) {
            return resolve_in_call_form(cursor, segment);
        }
        return resolve_in_seq(cursor, segment);
    }
    // Sets are unordered: nothing a key or index could name. Everything
    // else (atoms, error nodes) has no children to resolve into.
    None
}

/// Map lookup: chunk meaningful children into consecutive (key, value)
/// pairs, return the first pair whose key matches
fn resolve_in_map(map: &Cursor, segment: &PathSegment) -> Option<Resolved> {
    let elements: Vec<Cursor> = map.collection_elements().collect();
    for pair in elements.chunks(2) {
        if segment.matches(&pair[0]) {
            return Some(Resolved {
                target: pair[0].clone(),
                descend: pair.get(1).cloned(),
            });
        }
    }
    None
}

/// Sequence lookup: zero-based offset over meaningful elements
fn resolve_in_seq(seq: &Cursor, segment: &PathSegment) -> Option<Resolved> {
    let PathSegment::Index(index) = segment else {
        panic!(
            "cannot resolve {segment:?} against a {} node: sequences require an integer index",
            seq.kind()
        );
    };
    seq.collection_elements().nth(*index).map(|element| Resolved {
        descend: Some(element.clone()),
        target: element,
    })
}

/// Call-form lookup: scan the region after the leading symbol for a key
/// node matching the segment; its value is the next meaningful element
fn resolve_in_call_form(form: &Cursor, segment: &PathSegment) -> Option<Resolved> {
    form.collection_elements()
        .skip(1) // the distinguished symbol
        .find(|element| segment.matches(element))
        .map(|key| Resolved {
            descend: key.next_meaningful(),
            target: key,
        })
}

/// A list whose first meaningful child is the distinguished symbol
pub fn is_call_form(cursor: &Cursor) -> bool {
    cursor.is_list()
        && cursor
            .collection_elements()
            .next()
            .is_some_and(|head| head.is_symbol() && head.text() == CALL_FORM_SYMBOL)
}
