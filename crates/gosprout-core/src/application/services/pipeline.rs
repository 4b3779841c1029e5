//! Scaffold Pipeline - main application orchestrator.
//!
//! Steps run in a fixed order, each exactly once:
//! 1. Create (or reuse) the project directory
//! 2. `go mod init`
//! 3. `main.go`
//! 4. `Makefile`
//! 5. `git init`, then `.gitignore` and `git remote add`
//!
//! Failures in steps 1 and 2 end the run; failures in later steps are
//! reported and the next step still runs.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{CommandRunner, CommandSpec, Console, Filesystem},
        services::step::{
            ADD_REMOTE, CONTINUE_IN_DIRTY_DIR, MAKE_BUILD_FILE, MAKE_IGNORE_FILE,
            MAKE_MAIN_SOURCE, MAKE_VCS_REPO, Question, StepExecutor,
        },
    },
    domain::{
        Artifact, Flag, ScaffoldOptions, Toolchain, WarningPolicy, executable_base_name,
        markup::Piece,
    },
    error::{SproutError, SproutResult},
};

const PROJECT_DIR_PROMPT: &str = "Enter project directory name: ";
const MODULE_URL_PROMPT: &str = "Enter module url: ";
const EXECUTABLE_NAME_PROMPT: &str = "Executable name: ";

/// A unit of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ProjectDir,
    Module,
    MainSource,
    BuildFile,
    VcsRepo,
    IgnoreFile,
    Remote,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ProjectDir => "project directory",
            Self::Module => "module",
            Self::MainSource => "main.go",
            Self::BuildFile => "Makefile",
            Self::VcsRepo => "git repository",
            Self::IgnoreFile => "gitignore",
            Self::Remote => "git remote",
        })
    }
}

/// What a step ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The side effect happened.
    Completed,
    /// The flag resolved to false.
    Declined,
    /// Existing output was left in place.
    Kept,
    /// The step was abandoned after an error.
    Failed,
}

/// The steps that ran, in order.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub steps: Vec<(Step, StepOutcome)>,
}

impl ScaffoldReport {
    fn record(&mut self, step: Step, outcome: StepOutcome) {
        debug!(%step, ?outcome, "step finished");
        self.steps.push((step, outcome));
    }

    /// Outcome of `step`, or `None` when it never ran.
    pub fn outcome(&self, step: Step) -> Option<StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| *outcome)
    }
}

/// Drives the scaffolding steps against the injected ports.
pub struct ScaffoldPipeline {
    options: ScaffoldOptions,
    toolchain: Toolchain,
    exec: StepExecutor,
}

impl ScaffoldPipeline {
    pub fn new(
        options: ScaffoldOptions,
        toolchain: Toolchain,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        console: Box<dyn Console>,
    ) -> Self {
        let policy = options.on_warning;
        Self {
            options,
            toolchain,
            exec: StepExecutor::new(filesystem, runner, console, policy),
        }
    }

    /// Run every step.
    ///
    /// Returns [`SproutError::Cancelled`] when the operator gives empty
    /// input, and an error when the project directory or the module cannot
    /// be created.
    #[instrument(skip_all, fields(on_warning = %self.options.on_warning))]
    pub fn run(mut self) -> SproutResult<ScaffoldReport> {
        let mut report = ScaffoldReport::default();

        let root = self.project_dir()?;
        report.root = root.clone();
        report.record(Step::ProjectDir, StepOutcome::Completed);

        self.module(&root)?;
        report.record(Step::Module, StepOutcome::Completed);

        let result = self.artifact(&root, Artifact::MainSource, Flag::MainSource, &MAKE_MAIN_SOURCE);
        report.record(Step::MainSource, self.optional(Step::MainSource, result)?);

        let result = self.artifact(&root, Artifact::BuildFile, Flag::BuildFile, &MAKE_BUILD_FILE);
        report.record(Step::BuildFile, self.optional(Step::BuildFile, result)?);

        let result = self.vcs_repo(&root);
        let repo = self.optional(Step::VcsRepo, result)?;
        report.record(Step::VcsRepo, repo);

        if repo == StepOutcome::Completed {
            let result =
                self.artifact(&root, Artifact::IgnoreFile, Flag::IgnoreFile, &MAKE_IGNORE_FILE);
            report.record(Step::IgnoreFile, self.optional(Step::IgnoreFile, result)?);

            let result = self.remote(&root);
            report.record(Step::Remote, self.optional(Step::Remote, result)?);
        }

        info!(root = %report.root.display(), "pipeline finished");
        Ok(report)
    }

    /// Turn a step-local failure into a diagnostic; cancellations and
    /// option errors keep propagating.
    fn optional(&self, step: Step, result: SproutResult<StepOutcome>) -> SproutResult<StepOutcome> {
        match result {
            Err(SproutError::Application(err)) => {
                warn!(%step, error = %err, "step abandoned");
                self.exec.report_failure(&err)?;
                Ok(StepOutcome::Failed)
            }
            other => other,
        }
    }

    // ── Unconditional steps ────────────────────────────────────────────────

    fn project_dir(&mut self) -> SproutResult<PathBuf> {
        self.exec.announce("project directory")?;

        let dir = match self.options.project_dir.clone() {
            Some(dir) => dir,
            None => PathBuf::from(self.exec.require_value(PROJECT_DIR_PROMPT)?),
        };
        self.options.project_dir = Some(dir.clone());

        let fs = self.exec.filesystem();
        if !fs.exists(&dir) {
            fs.create_dir_all(&dir)?;
            info!(dir = %dir.display(), "project directory created");
            return Ok(dir);
        }

        if fs.has_content(&dir)? {
            match self.exec.policy() {
                WarningPolicy::Continue => {}
                WarningPolicy::Stop => {
                    info!(dir = %dir.display(), "project directory is not empty, stopping");
                    return Err(SproutError::Cancelled);
                }
                WarningPolicy::Prompt => {
                    self.exec.warn_not_empty(&format_args!("directory {}", dir.display()))?;
                    if !self.exec.confirm(&CONTINUE_IN_DIRTY_DIR)? {
                        return Err(SproutError::Cancelled);
                    }
                }
            }
        }

        debug!(dir = %dir.display(), "reusing existing project directory");
        Ok(dir)
    }

    fn module(&mut self, root: &Path) -> SproutResult<()> {
        self.exec.announce("module")?;

        let url = match self.options.module_url.clone() {
            Some(url) => url,
            None => self.exec.require_value(MODULE_URL_PROMPT)?,
        };
        self.options.module_url = Some(url.clone());

        self.exec
            .execute(&CommandSpec::new(&self.toolchain.go, root).args(["mod", "init", &url]))
    }

    // ── Optional steps ─────────────────────────────────────────────────────

    fn artifact(
        &mut self,
        root: &Path,
        artifact: Artifact,
        flag: Flag,
        question: &Question,
    ) -> SproutResult<StepOutcome> {
        if !self.exec.resolve(&self.options.flags, flag, question)? {
            return Ok(StepOutcome::Declined);
        }

        self.exec.announce(artifact.label())?;

        let path = root.join(artifact.file_name());
        if !self.exec.may_overwrite(&path, artifact.label())? {
            return Ok(StepOutcome::Kept);
        }

        let executable = if artifact.needs_executable_name() {
            self.executable_name()?
        } else {
            String::new()
        };

        self.exec.write(&path, &artifact.render(&executable))?;
        Ok(StepOutcome::Completed)
    }

    fn vcs_repo(&mut self, root: &Path) -> SproutResult<StepOutcome> {
        if !self
            .exec
            .resolve(&self.options.flags, Flag::VcsRepo, &MAKE_VCS_REPO)?
        {
            return Ok(StepOutcome::Declined);
        }

        self.exec.announce("git repository")?;
        self.exec
            .execute(&CommandSpec::new(&self.toolchain.git, root).arg("init"))?;
        Ok(StepOutcome::Completed)
    }

    fn remote(&mut self, root: &Path) -> SproutResult<StepOutcome> {
        if !self
            .exec
            .resolve(&self.options.flags, Flag::Remote, &ADD_REMOTE)?
        {
            return Ok(StepOutcome::Declined);
        }

        let name = match self.options.remote_name.clone() {
            Some(name) => name,
            None => {
                let default = &self.toolchain.default_remote;
                self.exec
                    .value_or(&format!("Enter remote name: (empty for {default}) "), default)?
            }
        };
        self.options.remote_name = Some(name.clone());

        let url = match self.options.remote_url.clone() {
            Some(url) => url,
            None => {
                let module = self.options.module_url.clone().unwrap_or_default();
                self.exec
                    .value_or(&format!("Enter remote url: (empty for {module}) "), &module)?
            }
        };
        self.options.remote_url = Some(url.clone());

        self.exec
            .info(&[Piece::Markup("adding remote"), Piece::Value(&name)])?;
        self.exec.execute(
            &CommandSpec::new(&self.toolchain.git, root).args(["remote", "add", &name, &url]),
        )?;
        Ok(StepOutcome::Completed)
    }

    /// The executable name, asked for once and reused afterwards.
    fn executable_name(&mut self) -> SproutResult<String> {
        if let Some(name) = &self.options.executable_name {
            return Ok(name.clone());
        }

        let answer = self.exec.require_value(EXECUTABLE_NAME_PROMPT)?;
        let name = executable_base_name(&answer).to_string();
        if name.is_empty() {
            return Err(SproutError::Cancelled);
        }

        self.options.executable_name = Some(name.clone());
        Ok(name)
    }
}
