//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `gosprout-core` and
//! `gosprout-adapters` only *emit* spans and events.
//!
//! Step announcements, prompts and step errors are console output, not log
//! records, so the default filter only lets warnings through (an abandoned
//! step, for instance). `-v` adds the step results the pipeline records at
//! INFO, `-vv` the option resolution and every spawned `go`/`git` command.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `GOSPROUT_LOG` overrides all of the above, then `RUST_LOG`.

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Environment variable holding a full filter directive for this tool.
pub const LOG_ENV: &str = "GOSPROUT_LOG";

/// Crates whose events are shown at the chosen level.
const TARGETS: [&str; 3] = ["gosprout", "gosprout_core", "gosprout_adapters"];

/// Initialise the global tracing subscriber, writing to stderr.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match env_filter() {
        Some(filter) => filter,
        None => default_filter(derive_level(args))?,
    };

    let use_ansi = !args.no_color && console::colors_enabled_stderr();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn env_filter() -> Option<EnvFilter> {
    EnvFilter::builder()
        .with_env_var(LOG_ENV)
        .try_from_env()
        .or_else(|_| EnvFilter::try_from_default_env())
        .ok()
}

/// Filter showing `level` for our own crates and nothing from dependencies.
fn default_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    let mut filter = EnvFilter::default().add_directive(LevelFilter::OFF.into());
    for target in TARGETS {
        filter = filter.add_directive(format!("{target}={level}").parse()?);
    }
    Ok(filter)
}

/// Translate the verbosity counter + quiet flag to a level.
fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true)), LevelFilter::ERROR);
    }

    #[test]
    fn level_follows_verbose_count() {
        assert_eq!(derive_level(&args_with(0, false)), LevelFilter::WARN);
        assert_eq!(derive_level(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(derive_level(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(derive_level(&args_with(3, false)), LevelFilter::TRACE);
        assert_eq!(derive_level(&args_with(10, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn default_filter_names_every_crate() {
        let filter = default_filter(LevelFilter::INFO).unwrap().to_string();
        for target in TARGETS {
            assert!(filter.contains(&format!("{target}=info")), "{filter}");
        }
        assert!(filter.contains("off"), "{filter}");
    }
}
