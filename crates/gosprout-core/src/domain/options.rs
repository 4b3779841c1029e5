//! Everything the operator asked for, resolved before the first step runs.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::{
    error::DomainError,
    flags::{Flag, FlagSet, Origin},
    policy::WarningPolicy,
};

/// Strips a trailing `.exe` from an executable name.
pub fn executable_base_name(raw: &str) -> &str {
    raw.strip_suffix(".exe").unwrap_or(raw)
}

/// The resolved scaffolding configuration threaded through the pipeline.
///
/// Text slots left `None` are prompted for when a step needs them.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub project_dir: Option<PathBuf>,
    pub module_url: Option<String>,
    pub executable_name: Option<String>,
    pub remote_name: Option<String>,
    pub remote_url: Option<String>,
    pub flags: FlagSet,
    pub on_warning: WarningPolicy,
}

impl ScaffoldOptions {
    pub fn builder() -> ScaffoldOptionsBuilder {
        ScaffoldOptionsBuilder::default()
    }
}

/// Collects requests in any order; [`ScaffoldOptionsBuilder::build`] applies
/// them all and reports the first contradiction.
#[derive(Debug, Default)]
pub struct ScaffoldOptionsBuilder {
    project_dir: Option<PathBuf>,
    module_url: Option<String>,
    executable_name: Option<String>,
    remote_name: Option<String>,
    remote_url: Option<String>,
    requests: Vec<(Flag, bool, Origin)>,
    on_warning: WarningPolicy,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

impl ScaffoldOptionsBuilder {
    pub fn project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.project_dir = if dir.as_os_str().is_empty() {
            None
        } else {
            Some(dir)
        };
        self
    }

    pub fn module_url(mut self, url: impl Into<String>) -> Self {
        self.module_url = non_empty(url);
        self
    }

    pub fn executable_name(mut self, name: impl Into<String>) -> Self {
        let name: String = name.into();
        self.executable_name = non_empty(executable_base_name(&name));
        self
    }

    /// Supplying a remote name asks for a remote.
    pub fn remote_name(mut self, name: impl Into<String>) -> Self {
        self.remote_name = non_empty(name);
        if self.remote_name.is_some() {
            self.requests.push((Flag::Remote, true, Origin::new("--remote-name")));
        }
        self
    }

    /// Supplying a remote URL asks for a remote.
    pub fn remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = non_empty(url);
        if self.remote_url.is_some() {
            self.requests.push((Flag::Remote, true, Origin::new("--remote-url")));
        }
        self
    }

    pub fn on_warning(mut self, policy: WarningPolicy) -> Self {
        self.on_warning = policy;
        self
    }

    /// Request `flag` be forced to `value`, on behalf of `origin`.
    pub fn flag(mut self, flag: Flag, value: bool, origin: impl Into<Origin>) -> Self {
        self.requests.push((flag, value, origin.into()));
        self
    }

    pub fn build(self) -> Result<ScaffoldOptions, DomainError> {
        let mut flags = FlagSet::new();
        for (flag, value, origin) in self.requests {
            flags.set(flag, value, origin)?;
        }

        debug!(
            main_source = ?flags.get(Flag::MainSource),
            build_file = ?flags.get(Flag::BuildFile),
            vcs_repo = ?flags.get(Flag::VcsRepo),
            ignore_file = ?flags.get(Flag::IgnoreFile),
            remote = ?flags.get(Flag::Remote),
            on_warning = %self.on_warning,
            "Options resolved"
        );

        Ok(ScaffoldOptions {
            project_dir: self.project_dir,
            module_url: self.module_url,
            executable_name: self.executable_name,
            remote_name: self.remote_name,
            remote_url: self.remote_url,
            flags,
            on_warning: self.on_warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flags::TriState;

    #[test]
    fn empty_strings_count_as_absent() {
        let options = ScaffoldOptions::builder()
            .project_dir("")
            .module_url("")
            .executable_name("")
            .remote_name("")
            .remote_url("")
            .build()
            .unwrap();

        assert!(options.project_dir.is_none());
        assert!(options.module_url.is_none());
        assert!(options.executable_name.is_none());
        assert!(options.remote_name.is_none());
        assert!(options.flags.get(Flag::Remote).is_unset());
    }

    #[test]
    fn executable_suffix_is_stripped() {
        let options = ScaffoldOptions::builder()
            .executable_name("hello.exe")
            .build()
            .unwrap();
        assert_eq!(options.executable_name.as_deref(), Some("hello"));
        assert_eq!(executable_base_name("plain"), "plain");
    }

    #[test]
    fn remote_name_forces_remote_and_repository() {
        let options = ScaffoldOptions::builder()
            .remote_name("origin")
            .build()
            .unwrap();
        assert_eq!(options.flags.get(Flag::Remote), TriState::True);
        assert_eq!(options.flags.get(Flag::VcsRepo), TriState::True);
    }

    #[test]
    fn do_git_with_no_gitignore_conflicts() {
        let err = ScaffoldOptions::builder()
            .flag(Flag::VcsRepo, true, "--do-git")
            .flag(Flag::IgnoreFile, false, "--no-do-gitignore")
            .build()
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn conflict_is_found_regardless_of_request_order() {
        let forward = ScaffoldOptions::builder()
            .flag(Flag::VcsRepo, false, "--no-do-git")
            .remote_url("https://example.com/repo.git")
            .build();
        let backward = ScaffoldOptions::builder()
            .remote_url("https://example.com/repo.git")
            .flag(Flag::VcsRepo, false, "--no-do-git")
            .build();
        assert!(forward.unwrap_err().is_conflict());
        assert!(backward.unwrap_err().is_conflict());
    }

    #[test]
    fn paired_flags_conflict() {
        let err = ScaffoldOptions::builder()
            .flag(Flag::MainSource, true, "--do-main-go")
            .flag(Flag::MainSource, false, "--no-do-main-go")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::FlagConflict {
                flag: Flag::MainSource,
                ..
            }
        ));
    }

    #[test]
    fn policy_is_carried_through() {
        let options = ScaffoldOptions::builder()
            .on_warning(WarningPolicy::Stop)
            .build()
            .unwrap();
        assert_eq!(options.on_warning, WarningPolicy::Stop);
    }
}
