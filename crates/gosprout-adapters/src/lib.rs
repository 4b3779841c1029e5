//! Infrastructure adapters for gosprout.
//!
//! This crate implements the ports defined in `gosprout-core::application::ports`.
//! It contains all filesystem and process I/O, plus the in-memory doubles
//! the pipeline tests drive.

pub mod console;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use console::ScriptedConsole;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ProcessRunner, RecordingRunner};
