//! gosprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gosprout
//! Go project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          gosprout-cli (CLI)             │
//! │  (flags, config, console, exit codes)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldPipeline, StepExecutor)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, CommandRunner, Console)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   gosprout-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ProcessRunner, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (FlagSet, ScaffoldOptions, Artifact,   │
//! │           markup formatter)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gosprout_core::prelude::*;
//!
//! # fn scaffold(
//! #     filesystem: Box<dyn Filesystem>,
//! #     runner: Box<dyn CommandRunner>,
//! #     console: Box<dyn Console>,
//! # ) -> SproutResult<()> {
//! // 1. Collect the requested options; conflicts surface here.
//! let options = ScaffoldOptions::builder()
//!     .project_dir("hello")
//!     .module_url("example.com/hello")
//!     .flag(Flag::VcsRepo, true, "--do-git")
//!     .build()?;
//!
//! // 2. Run the pipeline with injected adapters.
//! let pipeline = ScaffoldPipeline::new(options, Toolchain::default(), filesystem, runner, console);
//! let report = pipeline.run()?;
//! println!("scaffolded {}", report.root.display());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldPipeline, ScaffoldReport, Step, StepOutcome,
        ports::{CommandRunner, CommandSpec, Console, Filesystem},
    };
    pub use crate::domain::{
        Artifact, Flag, FlagSet, Origin, ScaffoldOptions, ScaffoldOptionsBuilder, Toolchain,
        TriState, WarningPolicy,
        markup::{self, Piece},
    };
    pub use crate::error::{SproutError, SproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
