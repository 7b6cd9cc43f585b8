//! Error types for EDN location resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for location resolution operations
///
/// Note the split in the error taxonomy: everything here is an *operational*
/// failure (I/O, malformed input). Data-dependent outcomes -- a missing key,
/// an out-of-range index, a set node -- are `None` results, not errors, and
/// contract violations (a non-index segment against a sequence) panic.
#[derive(Debug, Error)]
pub enum EdnlocError {
    /// Structural or lexical problem in the source text
    #[error("Parse error: {message} at byte {offset}")]
    ParseError { message: String, offset: usize },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Io,
    Internal,
}

impl EdnlocError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EdnlocError::ParseError { .. } => ErrorKind::Parse,
            EdnlocError::IoError { .. } => ErrorKind::Io,
            EdnlocError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Whether a caller can continue after this error
    ///
    /// Missing or unreadable input files and unparseable documents are
    /// expected outcomes for `locate`; they degrade to "location unknown".
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parse | ErrorKind::Io)
    }

    /// Create a parse error
    pub fn parse_error(message: impl Into<String>, offset: usize) -> Self {
        Self::ParseError {
            message: message.into(),
            offset,
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for EdnlocError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_recoverability() {
        let parse = EdnlocError::parse_error("unclosed Map", 0);
        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert!(parse.is_recoverable());

        let io = EdnlocError::io_error(
            "project.clj",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(io.kind(), ErrorKind::Io);
        assert!(io.is_recoverable());

        let internal = EdnlocError::internal_error("boom");
        assert!(!internal.is_recoverable());
    }
}
