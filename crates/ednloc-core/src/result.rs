//! Result type alias for location resolution operations

use crate::error::EdnlocError;

/// Standard Result type for location resolution operations
pub type Result<T> = std::result::Result<T, EdnlocError>;

/// Extension trait for Result to provide additional convenience methods
pub trait ResultExt<T> {
    /// Log the error and continue with None if recoverable
    fn log_and_continue(self) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn log_and_continue(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) if err.is_recoverable() => {
                tracing::debug!("continuing after error: {err}");
                None
            }
            Err(err) => {
                tracing::error!("fatal error: {err}");
                None
            }
        }
    }
}
