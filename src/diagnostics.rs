//! Unified, `miette`-based error type for the Casework harness.
//!
//! Two variants are scored verdicts that abort a run (`UnexpectedReturnCode`
//! and `WrongReturnCode`). The rest are infrastructure failures: the cases
//! directory could not be read, the interpreter could not be started, or the
//! configuration was unusable. Parse-level oddities in case files are never
//! errors.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::test::{Expectation, ReturnCode};

/// Every failure mode of a harness run.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// The child exited with something other than 0 or 1.
    #[error("unexpected return code {code} from `{command}` ({}:{line})", .file.display())]
    #[diagnostic(
        code(casework::unexpected_return_code),
        help("only 0 (success) and 1 (expected failure) are meaningful; anything else means the command itself broke")
    )]
    UnexpectedReturnCode {
        file: PathBuf,
        line: usize,
        command: String,
        code: ReturnCode,
    },

    /// The child exited with 0 or 1, but not the one its directive asked for.
    #[error("wrong return code {code} from `{command}` ({}:{line}), expected {expected}", .file.display())]
    #[diagnostic(code(casework::wrong_return_code))]
    WrongReturnCode {
        file: PathBuf,
        line: usize,
        command: String,
        expected: Expectation,
        code: ReturnCode,
    },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(casework::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start `{shell}` for `{command}`")]
    #[diagnostic(
        code(casework::spawn),
        help("check that the command interpreter exists, or pass --shell")
    )]
    Spawn {
        shell: String,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(casework::config))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },
}

impl HarnessError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        HarnessError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config(path: Option<&Path>, message: impl Into<String>) -> Self {
        HarnessError::Config {
            path: path.map(Path::to_path_buf),
            message: message.into(),
        }
    }

    /// True for the two scored abort paths, false for infrastructure errors.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            HarnessError::UnexpectedReturnCode { .. } | HarnessError::WrongReturnCode { .. }
        )
    }

    /// The terminal verdict line printed when a run aborts on a return code.
    pub fn verdict_line(&self) -> Option<String> {
        match self {
            HarnessError::UnexpectedReturnCode { code, .. } => Some(format!(
                "   UNEXPECTED RETURN CODE: {} TEST FAILED!",
                code
            )),
            HarnessError::WrongReturnCode { .. } => {
                Some("WRONG RETURN CODE: TEST FAILED!!!!!!!".to_string())
            }
            _ => None,
        }
    }

    /// The case file that triggered an abort, if this is one.
    pub fn failing_file(&self) -> Option<&Path> {
        match self {
            HarnessError::UnexpectedReturnCode { file, .. }
            | HarnessError::WrongReturnCode { file, .. } => Some(file.as_path()),
            _ => None,
        }
    }
}
