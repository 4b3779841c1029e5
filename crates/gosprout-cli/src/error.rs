//! Error handling for the gosprout CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use gosprout_core::error::{ErrorCategory as CoreCategory, SproutError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `gosprout-core`.
    #[error(transparent)]
    Core(#[from] SproutError),

    /// Configuration could not be read from the environment.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CliError {
    pub fn config(err: anyhow::Error) -> Self {
        CliError::Config {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::Config { .. } => vec![
                "Check the GOSPROUT_* environment variables (and any .env file)".into(),
                "Sections and keys are separated by `__`, e.g. GOSPROUT_TOOLS__GIT".into(),
            ],
        }
    }

    /// `true` when the operator stopped the run at a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_cancelled())
    }

    /// `true` for errors caused by the command line itself.
    pub fn is_usage(&self) -> bool {
        self.category() == ErrorCategory::UserError
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Usage => ErrorCategory::UserError,
                CoreCategory::Cancelled => ErrorCategory::Cancelled,
                CoreCategory::Io | CoreCategory::ExternalCommand => ErrorCategory::Internal,
            },
            Self::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Cancelled     |  0   |
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Cancelled => 0,
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Cancelled => tracing::info!("Cancelled: {}", self),
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The operator stopped at a prompt.
    Cancelled,
    /// Bad or contradictory command line.
    UserError,
    /// Configuration error.
    Configuration,
    /// Filesystem, terminal or child-process failure.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gosprout_core::application::ApplicationError;
    use gosprout_core::domain::{DomainError, Flag, Origin};

    fn conflict() -> CliError {
        CliError::Core(
            DomainError::FlagConflict {
                flag: Flag::VcsRepo,
                requested: false,
                requested_by: Origin::new("--no-do-git"),
                existing: true,
                existing_by: Origin::new("--remote-url"),
            }
            .into(),
        )
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn conflicts_exit_with_usage_code() {
        let err = conflict();
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn cancellation_exits_cleanly() {
        let err = CliError::Core(SproutError::Cancelled);
        assert!(err.is_cancelled());
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn command_failure_is_internal() {
        let err = CliError::Core(
            ApplicationError::CommandFailed {
                command: "go mod init x".into(),
                reason: "exit status: 1".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 1);
        assert!(err.suggestions().iter().any(|s| s.contains("PATH")));
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::config(anyhow::anyhow!("invalid type"));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("invalid type"));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_names_both_origins() {
        let s = conflict().format_plain(false);
        assert!(s.contains("Error: conflicting options"));
        assert!(s.contains("--no-do-git"));
        assert!(s.contains("--remote-url"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_causes_and_omits_hint() {
        let err = CliError::config(anyhow::anyhow!("missing field `go`").context("reading tools"));
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: reading tools"));
        assert!(!s.contains("--verbose"));
    }
}
