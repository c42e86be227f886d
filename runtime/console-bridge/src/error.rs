//! Error types for console construction and installation
//!
//! Print operations never fail: the host boundary has no error channel.
//! Everything here happens before the first character is emitted.

use thiserror::Error;

/// Error types for console operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("No primitive boundary supplied to console writer")]
    MissingBoundary,

    #[error("Host primitive `{name}` is missing")]
    MissingPrimitive { name: &'static str },

    #[error("System console already installed")]
    AlreadyInstalled,
}

impl ConsoleError {
    /// Whether this error was raised while constructing a writer
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            ConsoleError::MissingBoundary | ConsoleError::MissingPrimitive { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, ConsoleError>;
