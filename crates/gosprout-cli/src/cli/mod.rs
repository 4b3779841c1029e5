//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! The paired `--do-*` / `--no-do-*` switches deliberately carry no clap
//! conflicts: contradictions are reported by the option model, which knows
//! about implied values too.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use gosprout_core::domain::WarningPolicy;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "gosprout",
    bin_name = "gosprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactively scaffold a Go project",
    long_about = "gosprout creates a Go project directory, initializes its module, \
                  and optionally writes main.go, a Makefile and a .gitignore, \
                  initializes a git repository and adds a remote.",
    after_help = "No options are required; anything left unset is asked for.\n\
        Empty input at any prompt cancels.\n\n\
        EXAMPLES:\n\
        \x20 gosprout\n\
        \x20 gosprout hello --module-url example.com/hello --do-git --no-do-gitignore\n\
        \x20 gosprout hello --remote-name origin --on-warning stop",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

/// What to create and how.
#[derive(Debug, Clone, Default, Args)]
pub struct ScaffoldArgs {
    /// Directory to create the project in.
    #[arg(value_name = "PROJECT_DIR", help = "Project directory")]
    pub project_dir: Option<PathBuf>,

    #[arg(long = "module-url", value_name = "URL", help = "Go module path, e.g. example.com/hello")]
    pub module_url: Option<String>,

    #[arg(
        long = "executable-name",
        value_name = "NAME",
        help = "Executable name used by the Makefile and .gitignore"
    )]
    pub executable_name: Option<String>,

    /// Supplying a remote URL implies adding a remote.
    #[arg(long = "remote-url", value_name = "URL", help = "URL of the git remote to add")]
    pub remote_url: Option<String>,

    /// Supplying a remote name implies adding a remote.
    #[arg(long = "remote-name", value_name = "NAME", help = "Name of the git remote to add")]
    pub remote_name: Option<String>,

    #[arg(
        long = "on-warning",
        value_name = "POLICY",
        value_enum,
        ignore_case = true,
        help = "What to do when output already exists [default: prompt]"
    )]
    pub on_warning: Option<OnWarning>,

    #[arg(long = "do-main-go", help = "Create main.go")]
    pub do_main_go: bool,
    #[arg(long = "no-do-main-go", help = "Do not create main.go")]
    pub no_do_main_go: bool,

    #[arg(long = "do-makefile", help = "Create a Makefile")]
    pub do_makefile: bool,
    #[arg(long = "no-do-makefile", help = "Do not create a Makefile")]
    pub no_do_makefile: bool,

    #[arg(long = "do-git", help = "Initialize a git repository")]
    pub do_git: bool,
    #[arg(long = "no-do-git", help = "Do not initialize a git repository")]
    pub no_do_git: bool,

    #[arg(long = "do-gitignore", help = "Create a .gitignore (implies --do-git)")]
    pub do_gitignore: bool,
    #[arg(long = "no-do-gitignore", help = "Do not create a .gitignore")]
    pub no_do_gitignore: bool,
}

/// Warning policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OnWarning {
    /// Ask before touching existing output.
    Prompt,
    /// Overwrite existing output.
    Continue,
    /// Keep existing output and skip.
    Stop,
}

impl From<OnWarning> for WarningPolicy {
    fn from(value: OnWarning) -> Self {
        match value {
            OnWarning::Prompt => Self::Prompt,
            OnWarning::Continue => Self::Continue,
            OnWarning::Stop => Self::Stop,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["gosprout"]).unwrap();
        assert!(cli.scaffold.project_dir.is_none());
        assert!(cli.scaffold.on_warning.is_none());
    }

    #[test]
    fn paired_switches_both_parse() {
        let cli = Cli::try_parse_from(["gosprout", "--do-git", "--no-do-git"]).unwrap();
        assert!(cli.scaffold.do_git);
        assert!(cli.scaffold.no_do_git);
    }

    #[test]
    fn on_warning_is_case_insensitive() {
        let cli = Cli::try_parse_from(["gosprout", "--on-warning", "STOP"]).unwrap();
        assert_eq!(cli.scaffold.on_warning, Some(OnWarning::Stop));
        assert_eq!(WarningPolicy::from(OnWarning::Stop), WarningPolicy::Stop);
    }

    #[test]
    fn unknown_on_warning_is_rejected() {
        assert!(Cli::try_parse_from(["gosprout", "--on-warning", "ignore"]).is_err());
    }

    #[test]
    fn positional_project_dir() {
        let cli = Cli::try_parse_from(["gosprout", "hello", "--remote-name=upstream"]).unwrap();
        assert_eq!(cli.scaffold.project_dir, Some(PathBuf::from("hello")));
        assert_eq!(cli.scaffold.remote_name.as_deref(), Some("upstream"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["gosprout", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn no_color_env_accepts_any_truthy_value() {
        // SAFETY: the only test in this binary that touches NO_COLOR.
        unsafe { std::env::set_var("NO_COLOR", "1") };
        let set = Cli::try_parse_from(["gosprout"]).map(|cli| cli.global.no_color);

        unsafe { std::env::set_var("NO_COLOR", "false") };
        let falsey = Cli::try_parse_from(["gosprout"]).map(|cli| cli.global.no_color);

        unsafe { std::env::remove_var("NO_COLOR") };

        assert!(set.unwrap());
        assert!(!falsey.unwrap());
    }

    #[test]
    fn no_color_flag() {
        let cli = Cli::try_parse_from(["gosprout", "--no-color"]).unwrap();
        assert!(cli.global.no_color);
    }
}
