//! Per-module source text for diagnostic previews

use std::path::PathBuf;

/// The source text of one compiled module, split into lines.
///
/// Compiled programs install one of these per module at startup so that
/// runtime diagnostics can show the offending source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceModule {
    /// Creates a module record from its path and full source text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, source: &str) -> Self {
        Self {
            path: path.into(),
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    /// Returns the path the module was compiled from.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the source line at the given 1-based line number.
    #[must_use]
    pub fn line(&self, line: i32) -> Option<&str> {
        if line < 1 {
            return None;
        }
        self.lines.get((line - 1) as usize).map(String::as_str)
    }

    /// Returns the number of lines in the module.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
