//! A console fed from a list of answers, for driving the pipeline in tests.

use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex, MutexGuard},
};

use gosprout_core::{
    application::ports::Console,
    domain::markup::{self, Piece},
};

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    stdout: Vec<String>,
    stderr: Vec<String>,
}

/// Answers prompts from a queue; once the queue is empty every prompt
/// reads as end of input. Output is recorded with markup stripped.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inner: Arc<Mutex<Script>>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let console = Self::default();
        console
            .lock()
            .answers
            .extend(answers.into_iter().map(Into::into));
        console
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.lock().stdout.clone()
    }

    pub fn stderr(&self) -> Vec<String> {
        self.lock().stderr.clone()
    }

    /// Answers not consumed yet.
    pub fn unused_answers(&self) -> usize {
        self.lock().answers.len()
    }
}

impl Console for ScriptedConsole {
    fn print(&self, line: &[Piece<'_>]) -> io::Result<()> {
        self.lock().stdout.push(markup::render_line(line, false));
        Ok(())
    }

    fn eprint(&self, line: &[Piece<'_>]) -> io::Result<()> {
        self.lock().stderr.push(markup::render_line(line, false));
        Ok(())
    }

    fn ask(&self, prompt: &str) -> io::Result<String> {
        let mut script = self.lock();
        script.prompts.push(prompt.to_string());
        Ok(script
            .answers
            .pop_front()
            .map(|answer| answer.trim_matches([' ', '\t']).to_string())
            .unwrap_or_default())
    }
}
