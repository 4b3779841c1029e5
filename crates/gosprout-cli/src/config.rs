//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values derived from
//! it ([`Toolchain`], the default [`WarningPolicy`]).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `GOSPROUT_*` environment variables, `__` between section and key
//!    (e.g. `GOSPROUT_TOOLS__GIT=/usr/local/bin/git`); a `.env` file is
//!    loaded into the environment first
//! 3. Built-in defaults (always present)

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use gosprout_core::domain::{Toolchain, WarningPolicy};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for values not given on the command line.
    pub defaults: Defaults,
    /// External programs.
    pub tools: Tools,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub on_warning: WarningPolicy,
    pub remote_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            on_warning: WarningPolicy::Prompt,
            remote_name: "origin".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tools {
    pub go: String,
    pub git: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            go: "go".into(),
            git: "git".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the built-in defaults and the environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Environment::with_prefix("GOSPROUT"))
    }

    fn load_from(environment: Environment) -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(environment.prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// The programs and default remote handed to the pipeline.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            go: self.tools.go.clone(),
            git: self.tools.git.clone(),
            default_remote: self.defaults.remote_name.clone(),
        }
    }
}
