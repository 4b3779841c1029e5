//! The protocol every scaffolding step follows.
//!
//! 1. Resolve the governing flag, prompting when it is unset.
//! 2. Announce the step.
//! 3. Apply the warning policy to existing, non-empty output.
//! 4. Perform the side effect.
//!
//! Empty input at any prompt cancels the whole run
//! ([`SproutError::Cancelled`]).

use std::path::Path;

use tracing::{debug, info};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec, Console, Filesystem},
    },
    domain::{Flag, FlagSet, WarningPolicy, markup::Piece},
    error::{SproutError, SproutResult},
};

/// How an answer that is neither yes nor no is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    /// Only an answer starting with `n` declines.
    Yes,
    /// Only an answer starting with `y` accepts.
    No,
}

/// A yes/no prompt.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub text: &'static str,
    pub lean: Lean,
}

impl Question {
    /// Read a non-empty answer by its first character, case-insensitively.
    pub fn interpret(&self, answer: &str) -> bool {
        match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => true,
            Some('n') => false,
            _ => self.lean == Lean::Yes,
        }
    }
}

pub const MAKE_MAIN_SOURCE: Question = Question {
    text: "Do you want to make main.go? (Y/N) ",
    lean: Lean::Yes,
};
pub const MAKE_BUILD_FILE: Question = Question {
    text: "Do you want to make a Makefile? (Y/N) ",
    lean: Lean::Yes,
};
pub const MAKE_VCS_REPO: Question = Question {
    text: "Do you want to make a git repository? (Y/N) ",
    lean: Lean::Yes,
};
pub const MAKE_IGNORE_FILE: Question = Question {
    text: "Do you want to add a gitignore? (Y/N) ",
    lean: Lean::No,
};
pub const ADD_REMOTE: Question = Question {
    text: "Do you want to add a remote? (Y/N) ",
    lean: Lean::No,
};
pub const OVERWRITE: Question = Question {
    text: "Do you want to override it? (Y/N) ",
    lean: Lean::No,
};
pub const CONTINUE_IN_DIRTY_DIR: Question = Question {
    text: "Do you want to continue? (Y/N) ",
    lean: Lean::No,
};

/// Runs the guarded step protocol against the injected ports.
pub struct StepExecutor {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    console: Box<dyn Console>,
    policy: WarningPolicy,
}

impl StepExecutor {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        console: Box<dyn Console>,
        policy: WarningPolicy,
    ) -> Self {
        Self {
            filesystem,
            runner,
            console,
            policy,
        }
    }

    pub fn policy(&self) -> WarningPolicy {
        self.policy
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    // ── Prompts ────────────────────────────────────────────────────────────

    fn ask(&self, prompt: &str) -> SproutResult<String> {
        Ok(self.console.ask(prompt).map_err(ApplicationError::from)?)
    }

    /// Ask a yes/no question; empty input cancels.
    pub fn confirm(&self, question: &Question) -> SproutResult<bool> {
        let answer = self.ask(question.text)?;
        if answer.is_empty() {
            return Err(SproutError::Cancelled);
        }
        Ok(question.interpret(&answer))
    }

    /// The effective value of `flag`, asking when it is unset.
    ///
    /// The answer is not written back: every call with an unset flag asks.
    pub fn resolve(&self, flags: &FlagSet, flag: Flag, question: &Question) -> SproutResult<bool> {
        match flags.get(flag).value() {
            Some(value) => {
                debug!(%flag, value, "flag decided by options");
                Ok(value)
            }
            None => self.confirm(question),
        }
    }

    /// Ask for a free-text value; empty input cancels.
    pub fn require_value(&self, prompt: &str) -> SproutResult<String> {
        let value = self.ask(prompt)?;
        if value.is_empty() {
            return Err(SproutError::Cancelled);
        }
        Ok(value)
    }

    /// Ask for a free-text value; empty input takes `default`.
    pub fn value_or(&self, prompt: &str, default: &str) -> SproutResult<String> {
        let value = self.ask(prompt)?;
        Ok(if value.is_empty() {
            default.to_string()
        } else {
            value
        })
    }

    // ── Messages ───────────────────────────────────────────────────────────

    fn print(&self, line: &[Piece<'_>]) -> SproutResult<()> {
        Ok(self.console.print(line).map_err(ApplicationError::from)?)
    }

    /// `Info: <message>` on standard output.
    pub fn info(&self, message: &[Piece<'_>]) -> SproutResult<()> {
        let mut line = vec![Piece::Markup("{blue}Info:{reset}")];
        line.extend_from_slice(message);
        self.print(&line)
    }

    /// `Info: creating <what>` on standard output.
    pub fn announce(&self, what: &str) -> SproutResult<()> {
        self.info(&[Piece::Markup("creating"), Piece::Value(&what)])
    }

    /// `Warning: <what> already exists and is not empty` on standard output.
    pub fn warn_not_empty(&self, what: &dyn std::fmt::Display) -> SproutResult<()> {
        self.print(&[
            Piece::Markup("{yellow}Warning:"),
            Piece::Value(what),
            Piece::Markup("already exists and is not empty{reset}"),
        ])
    }

    /// `Error: <err>` on the diagnostic channel.
    pub fn report_failure(&self, err: &ApplicationError) -> SproutResult<()> {
        Ok(self
            .console
            .eprint(&[
                Piece::Markup("{red}Error:"),
                Piece::Value(err),
                Piece::Markup("{reset}"),
            ])
            .map_err(ApplicationError::from)?)
    }

    // ── Guards and side effects ────────────────────────────────────────────

    /// Whether the step may write `path`, per the warning policy.
    pub fn may_overwrite(&self, path: &Path, what: &str) -> SproutResult<bool> {
        if !self.filesystem.exists(path) || !self.filesystem.has_content(path)? {
            return Ok(true);
        }

        match self.policy {
            WarningPolicy::Continue => {
                debug!(path = %path.display(), "overwriting existing output");
                Ok(true)
            }
            WarningPolicy::Stop => {
                info!(path = %path.display(), "keeping existing output");
                Ok(false)
            }
            WarningPolicy::Prompt => {
                self.warn_not_empty(&what)?;
                self.confirm(&OVERWRITE)
            }
        }
    }

    pub fn write(&self, path: &Path, content: &str) -> SproutResult<()> {
        self.filesystem.write_file(path, content)?;
        info!(path = %path.display(), bytes = content.len(), "file written");
        Ok(())
    }

    /// Echo `command` as `$ <command>`, then run it.
    pub fn execute(&self, command: &CommandSpec) -> SproutResult<()> {
        self.print(&[Piece::Markup("{blue}${reset}"), Piece::Value(command)])?;
        self.runner.run(command)?;
        info!(command = %command, "command succeeded");
        Ok(())
    }
}
