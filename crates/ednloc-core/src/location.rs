//! Source locations for resolved paths
//!
//! Line numbers are defined purely by the tree: the number of newline tokens
//! strictly before the target in document order, plus one. That makes the
//! computation independent of physical column widths or tab expansion; the
//! column is the byte offset since the end of the last preceding newline.

use std::path::PathBuf;

use rowan::TextSize;

use crate::cst::EdnSyntaxKind;
use crate::cursor::Cursor;
use crate::resolve::KeyPath;
use crate::value::Value;

/// A fully resolved source position
///
/// Produced only when the whole path resolved; never partially populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// File the document was read from
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// 1-based column (bytes since the last newline)
    pub column: usize,
    /// Decoded value at the resolved position, when it decodes
    pub value: Option<Value>,
    /// The path that was resolved
    pub path: KeyPath,
    /// Cursor at the resolved position
    pub cursor: Cursor,
}

/// Line and column of a cursor, both 1-based
///
/// Walks the document in pre-order from the root, counting newline tokens
/// until the cursor is reached. Bounded by the tree size.
pub fn line_and_column(cursor: &Cursor) -> (usize, usize) {
    let root = cursor.to_root();
    let mut line = 1usize;
    let mut line_start = TextSize::from(0);

    let mut walk = Some(root);
    while let Some(current) = walk {
        if current == *cursor {
            break;
        }
        if current.kind() == EdnSyntaxKind::Newline {
            line += 1;
            line_start = current.text_range().end();
        }
        walk = current.next_preorder();
    }

    let column = usize::from(cursor.text_range().start() - line_start) + 1;
    (line, column)
}

/// 1-based line number of a cursor
pub fn line_number(cursor: &Cursor) -> usize {
    line_and_column(cursor).0
}
