//! Unified error handling for gosprout Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for gosprout Core operations.
#[derive(Debug, Error, Clone)]
pub enum SproutError {
    /// Contradictory or malformed options.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A filesystem, command or terminal operation failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The operator answered a required prompt with empty input.
    #[error("cancelled by user")]
    Cancelled,
}

impl SproutError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Cancelled => vec![],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Usage,
            Self::Application(e) => e.category(),
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad or contradictory options; nothing was touched.
    Usage,
    /// Voluntary stop at a prompt.
    Cancelled,
    /// Filesystem or terminal failure.
    Io,
    /// An external program failed.
    ExternalCommand,
}

/// Convenient result type alias.
pub type SproutResult<T> = Result<T, SproutError>;
