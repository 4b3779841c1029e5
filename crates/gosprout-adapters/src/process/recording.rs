//! A runner that records commands instead of running them.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

use gosprout_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandSpec},
    },
    error::SproutResult,
};

#[derive(Debug, Default)]
struct Recording {
    commands: Vec<CommandSpec>,
    failing: HashSet<String>,
}

/// Test double for [`CommandRunner`]. Clones share the recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every later run of `program` fails, as if it exited with status 1.
    pub fn failing(self, program: &str) -> Self {
        self.lock().failing.insert(program.to_string());
        self
    }

    /// Commands seen so far, failed ones included.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.lock().commands.clone()
    }

    /// Commands seen so far, as shell lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.lock().commands.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> SproutResult<()> {
        let mut recording = self.lock();
        recording.commands.push(command.clone());
        if recording.failing.contains(&command.program) {
            return Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: "exit status: 1".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_including_failures() {
        let runner = RecordingRunner::new().failing("git");
        let handle = runner.clone();

        runner.run(&CommandSpec::new("go", "demo").args(["mod", "init", "x"])).unwrap();
        assert!(runner.run(&CommandSpec::new("git", "demo").arg("init")).is_err());

        assert_eq!(handle.command_lines(), vec!["go mod init x", "git init"]);
        assert_eq!(handle.commands()[1].cwd, std::path::PathBuf::from("demo"));
    }
}
