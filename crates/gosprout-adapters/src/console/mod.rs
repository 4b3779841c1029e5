//! Console adapters.

mod scripted;

pub use scripted::ScriptedConsole;
