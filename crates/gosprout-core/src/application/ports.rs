//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from the outside world.
//! The `gosprout-adapters` crate provides implementations; the console is
//! implemented by the CLI, which owns the two output channels.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::markup::Piece;
use crate::error::SproutResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gosprout_adapters::LocalFilesystem` (production)
/// - `gosprout_adapters::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// `true` for a non-empty file or a directory with at least one entry.
    fn has_content(&self, path: &Path) -> SproutResult<bool>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Create or truncate a file and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()>;
}

/// An external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Directory the program runs in.
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Port for running external programs with the console's streams.
///
/// Implemented by:
/// - `gosprout_adapters::ProcessRunner` (production)
/// - `gosprout_adapters::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run to completion; a non-zero exit is an error.
    fn run(&self, command: &CommandSpec) -> SproutResult<()>;
}

/// Port for the operator's terminal.
///
/// Lines are given as [`Piece`]s; each channel decides on its own whether
/// the markup in them is rendered as colour or stripped.
pub trait Console {
    /// Write a line to standard output.
    fn print(&self, line: &[Piece<'_>]) -> io::Result<()>;

    /// Write a line to the diagnostic channel.
    fn eprint(&self, line: &[Piece<'_>]) -> io::Result<()>;

    /// Show `prompt` and read one line with surrounding spaces and tabs
    /// removed. End of input reads as an empty line.
    fn ask(&self, prompt: &str) -> io::Result<String>;
}
