//! The Casework Command-Line Interface.
//!
//! Resolves configuration, drives the [`TestRunner`] and maps its verdict to
//! the process exit status: 0 when every directive behaved, 1 otherwise.

use crate::cli::args::CaseworkArgs;
use crate::cli::output::StdoutSink;
use crate::config::HarnessConfig;
use crate::test::executor::ShellExecutor;
use crate::test::runner::TestRunner;
use crate::HarnessError;
use clap::Parser;
use std::process;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = CaseworkArgs::parse();

    // Until the config resolves, only the flag can say anything about colors.
    let config = match HarnessConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            output::print_failure(e, !args.no_color);
            process::exit(1);
        }
    };

    if let Err(e) = run_with_config(&args, &config) {
        output::print_failure(e, config.use_colors);
        process::exit(1);
    }
}

/// Runs (or, with `--dry-run`, plans) the whole cases directory.
pub fn run_with_config(args: &CaseworkArgs, config: &HarnessConfig) -> Result<(), HarnessError> {
    tracing::debug!(?config, "resolved configuration");

    let mut runner = TestRunner::new(
        &config.cases_dir,
        &config.exe,
        ShellExecutor::new(config.shell.as_str()),
    );
    let mut sink = StdoutSink;

    if args.dry_run {
        let summary = runner.plan(&mut sink)?;
        output::print_plan_summary(&summary, config.use_colors);
        return Ok(());
    }

    let summary = runner.run(&mut sink)?;
    output::print_passed(&summary, config.use_colors);
    Ok(())
}
