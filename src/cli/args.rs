//! Defines the command-line arguments for the Casework test runner.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
///
/// Every value is optional here; unset values fall back to the config file
/// and then to the built-in defaults.
#[derive(Debug, Parser)]
#[command(
    name = "test_runner",
    version,
    about = "Runs the @DO / @DO_FAIL directives embedded in test-case files and checks their exit codes."
)]
pub struct CaseworkArgs {
    /// Directory of test-case files (not searched recursively) [default: cases]
    #[arg(long, value_name = "DIR")]
    pub cases: Option<PathBuf>,

    /// Executable under test, substituted for $EXE$
    #[arg(long, value_name = "PATH")]
    pub exe: Option<PathBuf>,

    /// Command interpreter that runs each command line [default: sh, or cmd on Windows]
    #[arg(long, value_name = "PROGRAM")]
    pub shell: Option<String>,

    /// YAML file with cases_dir, exe, shell and use_colors keys
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the commands each file would run, without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored verdict lines
    #[arg(long)]
    pub no_color: bool,
}
