//! Runs external programs with `std::process`.

use std::process::{Command, Stdio};

use tracing::debug;

use gosprout_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec},
    },
    error::SproutResult,
};

/// Production runner: the child shares the terminal's streams and runs in
/// the command's working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandSpec) -> SproutResult<()> {
        debug!(command = %command, cwd = %command.cwd.display(), "spawning");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
