//! Application layer errors.
//!
//! These errors represent failures of the outside world (filesystem, child
//! processes, the terminal), not contradictions in the options. Option
//! errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised while a step performs its side effect.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("failed to {operation} {}: {reason}", .path.display())]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// An external program could not be started or exited unsuccessfully.
    #[error("`{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Reading from or writing to the console failed.
    #[error("terminal error: {reason}")]
    Terminal { reason: String },
}

impl ApplicationError {
    pub fn filesystem(
        operation: &'static str,
        path: impl Into<PathBuf>,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::Filesystem {
            operation,
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Command failed: {command}"),
                "Ensure go and git are installed and in your PATH".into(),
                "Check the command output above for details".into(),
            ],
            Self::Terminal { .. } => vec!["Check that stdin and stdout are usable".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::Terminal { .. } => ErrorCategory::Io,
            Self::CommandFailed { .. } => ErrorCategory::ExternalCommand,
        }
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal {
            reason: err.to_string(),
        }
    }
}
