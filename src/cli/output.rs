//! Handles all user-facing output for the CLI.
//!
//! Progress lines (case file paths and the commands about to run) go through
//! an [`OutputSink`] so the runner can be driven from tests with an
//! [`OutputBuffer`]. Verdict lines are colorized with `termcolor`.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::test::RunSummary;
use crate::HarnessError;

/// Destination for progress lines.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// OutputBuffer: collects output into a String for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

/// StdoutSink: writes progress to stdout, interleaved with the children's output.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{}", text);
    }
}

fn color_choice(use_colors: bool) -> ColorChoice {
    if use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints the overall success line.
pub fn print_passed(summary: &RunSummary, use_colors: bool) {
    let mut stdout = StandardStream::stdout(color_choice(use_colors));
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = writeln!(stdout, "TEST PASSED");
    let _ = stdout.reset();
    tracing::info!(
        files = summary.files,
        files_with_commands = summary.files_with_commands,
        commands = summary.commands,
        "run complete"
    );
}

/// Prints the dry-run footer.
pub fn print_plan_summary(summary: &RunSummary, use_colors: bool) {
    let mut stdout = StandardStream::stdout(color_choice(use_colors));
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(
        stdout,
        "{} command(s) planned across {} file(s); nothing executed",
        summary.commands, summary.files
    );
    let _ = stdout.reset();
}

/// Prints the terminal verdict for an aborted run, then the full diagnostic on stderr.
pub fn print_failure(error: HarnessError, use_colors: bool) {
    if let Some(line) = error.verdict_line() {
        let mut stdout = StandardStream::stdout(color_choice(use_colors));
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.reset();
        let _ = stdout.flush();
    }
    eprintln!("{:?}", miette::Report::new(error));
}
