//! ednloc Core
//!
//! Core engine for resolving logical paths through EDN configuration
//! documents (maps, vectors, lists and `(defproject ...)` call-forms) back
//! to exact source locations: file, line and column.
//!
//! The crate parses a document into a lossless CST, walks a path of key and
//! index segments with an immutable [`Cursor`], and reports the resolved
//! position together with the decoded value, so a validation layer can point
//! at the offending key token instead of printing an abstract path.

pub mod cst; // Concrete Syntax Tree (lossless, Rowan-based)
pub mod cursor;
pub mod error;
pub mod locate;
pub mod location;
pub mod resolve;
pub mod result;
pub mod value;

// Re-export commonly used types
pub use cst::{
    CstToken, EdnLanguage, EdnSyntaxElement, EdnSyntaxKind, EdnSyntaxNode, EdnSyntaxToken,
    LexerError, ParseError, ParseErrorKind, parse_edn,
};
pub use cursor::Cursor;
pub use error::{EdnlocError, ErrorKind};
pub use locate::{locate, locate_in_source};
pub use location::{Location, line_and_column, line_number};
pub use resolve::{CALL_FORM_SYMBOL, KeyPath, PathSegment, is_call_form, resolve_path};
pub use result::{Result, ResultExt};
pub use value::Value;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ednloc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
