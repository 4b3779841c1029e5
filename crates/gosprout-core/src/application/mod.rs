//! Application layer for gosprout.
//!
//! This layer contains:
//! - **Services**: the scaffolding pipeline and the step protocol
//! - **Ports**: traits for the filesystem, child processes and the console
//! - **Errors**: failures of those ports
//!
//! Option rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldPipeline, ScaffoldReport, Step, StepOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, CommandSpec, Console, Filesystem};

pub use error::ApplicationError;
