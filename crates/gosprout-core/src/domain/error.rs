// ============================================================================
// domain/error.rs - OPTION MODEL ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::flags::{Flag, Origin};

/// Root domain error type.
///
/// Every variant is a usage error: it is raised while the requested options
/// are being assembled, before any step touches the filesystem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Conflicts
    // ========================================================================
    #[error(
        "conflicting options: {requested_by} sets `{flag}` to {requested}, \
         but {existing_by} already set it to {existing}"
    )]
    FlagConflict {
        flag: Flag,
        requested: bool,
        requested_by: Origin,
        existing: bool,
        existing_by: Origin,
    },

    #[error(
        "conflicting options: {first} ({first_by}) cannot be combined with {second} ({second_by})"
    )]
    ForbiddenCombination {
        first: String,
        first_by: Origin,
        second: String,
        second_by: Origin,
    },

    // ========================================================================
    // Invalid values
    // ========================================================================
    #[error("unknown action on warning `{0}`")]
    UnknownWarningPolicy(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FlagConflict { flag, .. } => vec![
                format!("Pass only options that agree on `{flag}`"),
                "--do-gitignore and --remote-name/--remote-url imply --do-git".into(),
                "--no-do-gitignore implies --no-do-git".into(),
            ],
            Self::ForbiddenCombination { .. } => vec![
                "A .gitignore or a remote needs a git repository".into(),
                "Drop --no-do-git or the option that needs the repository".into(),
            ],
            Self::UnknownWarningPolicy(_) => {
                vec!["Valid values for --on-warning: Prompt, Continue, Stop".into()]
            }
        }
    }

    /// Whether this error reports contradictory options.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::FlagConflict { .. } | Self::ForbiddenCombination { .. }
        )
    }
}
