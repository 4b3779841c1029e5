//! Builds the scaffold options from the command line and runs the pipeline.

use tracing::{info, instrument};

use gosprout_adapters::{LocalFilesystem, ProcessRunner};
use gosprout_core::{
    application::ScaffoldPipeline,
    domain::{Flag, ScaffoldOptions, WarningPolicy},
};

use crate::{
    cli::ScaffoldArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Resolve options (conflicts fail here, before anything is touched), then
/// run every step against the real filesystem and processes.
#[instrument(skip_all)]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = build_options(&args, &config)?;

    let pipeline = ScaffoldPipeline::new(
        options,
        config.toolchain(),
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
        Box::new(output),
    );
    let report = pipeline.run()?;

    info!(
        root = %report.root.display(),
        steps = report.steps.len(),
        "Project scaffolded"
    );
    Ok(())
}

/// Map the command line onto the option model.
pub fn build_options(args: &ScaffoldArgs, config: &AppConfig) -> CliResult<ScaffoldOptions> {
    let switches = [
        (Flag::MainSource, args.do_main_go, "--do-main-go", true),
        (Flag::MainSource, args.no_do_main_go, "--no-do-main-go", false),
        (Flag::BuildFile, args.do_makefile, "--do-makefile", true),
        (Flag::BuildFile, args.no_do_makefile, "--no-do-makefile", false),
        (Flag::VcsRepo, args.do_git, "--do-git", true),
        (Flag::VcsRepo, args.no_do_git, "--no-do-git", false),
        (Flag::IgnoreFile, args.do_gitignore, "--do-gitignore", true),
        (Flag::IgnoreFile, args.no_do_gitignore, "--no-do-gitignore", false),
    ];

    let on_warning = args
        .on_warning
        .map(WarningPolicy::from)
        .unwrap_or(config.defaults.on_warning);

    let mut builder = ScaffoldOptions::builder().on_warning(on_warning);
    if let Some(dir) = &args.project_dir {
        builder = builder.project_dir(dir.clone());
    }
    if let Some(url) = &args.module_url {
        builder = builder.module_url(url.as_str());
    }
    if let Some(name) = &args.executable_name {
        builder = builder.executable_name(name.as_str());
    }
    if let Some(name) = &args.remote_name {
        builder = builder.remote_name(name.as_str());
    }
    if let Some(url) = &args.remote_url {
        builder = builder.remote_url(url.as_str());
    }
    for (flag, given, origin, value) in switches {
        if given {
            builder = builder.flag(flag, value, origin);
        }
    }

    builder.build().map_err(|e| CliError::Core(e.into()))
}
