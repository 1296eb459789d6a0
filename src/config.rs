//! Harness configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! command-line flags.
//!
//! ```yaml
//! cases_dir: tests/cases
//! exe: target/release/analyzer
//! shell: bash
//! use_colors: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::args::CaseworkArgs;
use crate::test::executor::ShellExecutor;
use crate::HarnessError;

/// Configuration for a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub cases_dir: PathBuf,
    /// Executable under test, the value of `$EXE$`.
    pub exe: PathBuf,
    pub shell: String,
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cases_dir: PathBuf::from("cases"),
            exe: PathBuf::from("IntelShaderAnalyzer.exe"),
            shell: ShellExecutor::default_shell().to_string(),
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

/// On-disk form; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    cases_dir: Option<PathBuf>,
    exe: Option<PathBuf>,
    shell: Option<String>,
    use_colors: Option<bool>,
}

impl HarnessConfig {
    /// Loads a YAML config file on top of the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Self::from_yaml(&text).map_err(|message| HarnessError::config(Some(path), message))
    }

    fn from_yaml(text: &str) -> Result<Self, String> {
        let file: ConfigFile = if text.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(text).map_err(|e| e.to_string())?
        };
        let mut config = Self::default();
        if let Some(cases_dir) = file.cases_dir {
            config.cases_dir = cases_dir;
        }
        if let Some(exe) = file.exe {
            config.exe = exe;
        }
        if let Some(shell) = file.shell {
            config.shell = shell;
        }
        if let Some(use_colors) = file.use_colors {
            config.use_colors = use_colors;
        }
        Ok(config)
    }

    /// Builds the effective configuration for a CLI invocation.
    pub fn resolve(args: &CaseworkArgs) -> Result<Self, HarnessError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        if config.shell.trim().is_empty() {
            return Err(HarnessError::config(
                args.config.as_deref(),
                "shell must not be empty",
            ));
        }
        Ok(config)
    }

    fn apply_args(&mut self, args: &CaseworkArgs) {
        if let Some(cases_dir) = &args.cases {
            self.cases_dir = cases_dir.clone();
        }
        if let Some(exe) = &args.exe {
            self.exe = exe.clone();
        }
        if let Some(shell) = &args.shell {
            self.shell = shell.clone();
        }
        if args.no_color {
            self.use_colors = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(argv: &[&str]) -> CaseworkArgs {
        CaseworkArgs::parse_from(std::iter::once("test_runner").chain(argv.iter().copied()))
    }

    #[test]
    fn defaults_point_at_cases_directory() {
        let config = HarnessConfig::default();
        assert_eq!(config.cases_dir, PathBuf::from("cases"));
        assert_eq!(config.shell, ShellExecutor::default_shell());
    }

    #[test]
    fn yaml_overrides_only_given_keys() {
        let config = HarnessConfig::from_yaml("exe: build/tool\nuse_colors: false\n").unwrap();
        assert_eq!(config.exe, PathBuf::from("build/tool"));
        assert_eq!(config.cases_dir, PathBuf::from("cases"));
        assert!(!config.use_colors);
    }

    #[test]
    fn empty_yaml_is_defaults() {
        let config = HarnessConfig::from_yaml("   \n").unwrap();
        assert_eq!(config.cases_dir, HarnessConfig::default().cases_dir);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(HarnessConfig::from_yaml("timeout: 5\n").is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casework.yaml");
        fs::write(&path, "cases_dir: from-file\nexe: file-tool\nshell: bash\n").unwrap();
        let path_str = path.display().to_string();

        let config = HarnessConfig::resolve(&args(&[
            "--config",
            &path_str,
            "--exe",
            "flag-tool",
            "--no-color",
        ]))
        .unwrap();

        assert_eq!(config.cases_dir, PathBuf::from("from-file"));
        assert_eq!(config.exe, PathBuf::from("flag-tool"));
        assert_eq!(config.shell, "bash");
        assert!(!config.use_colors);
    }

    #[test]
    fn bad_config_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casework.yaml");
        fs::write(&path, "cases_dir: [unclosed\n").unwrap();
        let err = HarnessConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, HarnessError::Config { path: Some(_), .. }));
    }

    #[test]
    fn empty_shell_is_rejected() {
        let err = HarnessConfig::resolve(&args(&["--shell", ""])).unwrap_err();
        assert!(matches!(err, HarnessError::Config { .. }));
    }
}
