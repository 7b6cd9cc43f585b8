//! Top-level path-to-location queries
//!
//! The entry points a validation layer calls with the abstract path from its
//! own violation report, to enrich the message with file/line/column before
//! display. Each call parses the document fresh; nothing is cached or
//! mutated, so concurrent calls over the same file need no coordination.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cst::parse_edn;
use crate::cursor::Cursor;
use crate::error::EdnlocError;
use crate::location::{Location, line_and_column};
use crate::resolve::{PathSegment, resolve_path};
use crate::result::ResultExt;
use crate::value::Value;

/// Resolve `path` inside the file at `file`
///
/// `None` when the file is missing or unreadable, when the document does not
/// parse cleanly, or when the path does not resolve. Callers must treat
/// `None` as "location unknown" and fall back to reporting the path alone.
pub fn locate(file: &Path, path: &[PathSegment]) -> Option<Location> {
    let source = fs::read_to_string(file)
        .map_err(|err| EdnlocError::io_error(file, err))
        .log_and_continue()?;
    locate_in_source(&source, file, path)
}

/// Resolve `path` inside already-loaded source text
///
/// `file` is carried into the returned [`Location`] as the file identifier.
pub fn locate_in_source(source: &str, file: &Path, path: &[PathSegment]) -> Option<Location> {
    let (cst, lexer_errors, parse_errors) = parse_edn(source);
    if !lexer_errors.is_empty() || !parse_errors.is_empty() {
        debug!(
            file = %file.display(),
            lexer_errors = lexer_errors.len(),
            parse_errors = parse_errors.len(),
            "document did not parse cleanly; no location"
        );
        return None;
    }

    // Resolution starts at the first meaningful top-level form
    let start = Cursor::from_node(cst)
        .first_child()?
        .siblings_rightward()
        .next()?;

    let cursor = resolve_path(&start, path)?;
    let (line, column) = line_and_column(&cursor);
    let value = Value::for_resolved(&cursor);
    debug!(file = %file.display(), line, column, "path resolved");

    Some(Location {
        file: file.to_path_buf(),
        line,
        column,
        value,
        path: path.to_vec(),
        cursor,
    })
}
