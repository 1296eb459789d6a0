use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::HarnessError;

/// One test-case file and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFile {
    /// Base name, the value of `$FILE$`.
    pub name: String,
    /// Cases directory joined with the base name, the value of `$PATH$`.
    pub path: PathBuf,
    pub source: String,
}

impl CaseFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Ok(Self::from_source(path, source))
    }

    pub fn from_source<P: AsRef<Path>>(path: P, source: impl Into<String>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Lists the regular files directly inside `root`.
///
/// Subdirectories are skipped, not descended into. Symlinks count as whatever
/// they point at. The order is whatever the directory listing yields; callers
/// must not rely on it.
pub fn discover_case_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, HarnessError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(HarnessError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| HarnessError::io(root, e.into()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        files.push(path.to_path_buf());
    }
    tracing::debug!(root = %root.display(), count = files.len(), "discovered case files");
    Ok(files)
}
