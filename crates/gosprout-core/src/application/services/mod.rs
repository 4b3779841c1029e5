//! Application services - orchestrate the scaffolding run.
//!
//! [`ScaffoldPipeline`] owns the step order; [`StepExecutor`] owns the
//! per-step protocol (prompt, announce, guard, act).

pub mod pipeline;
pub mod step;

pub use pipeline::{ScaffoldPipeline, ScaffoldReport, Step, StepOutcome};
pub use step::{Lean, Question, StepExecutor};
