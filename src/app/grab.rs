//! Glob selection of log files for download
//!
//! Matching is pure and order-preserving: patterns are tested in the order
//! given, descriptors in listing order, and a descriptor matched by several
//! patterns is selected once.

use std::path::PathBuf;

use glob::Pattern;

use crate::app::models::LogFileInfo;
use crate::errors::{GrabError, GrabResult};

/// Outcome of one grab invocation under the continue-and-collect policy
#[derive(Debug, Default)]
pub struct GrabReport {
    /// Files written to disk, in download order
    pub downloaded: Vec<Downloaded>,

    /// Matches whose download or write failed
    pub failures: Vec<GrabFailure>,
}

/// One successfully written log file
#[derive(Debug)]
pub struct Downloaded {
    pub name: String,
    pub path: PathBuf,
}

/// One failed download, recorded so the remaining matches still run
#[derive(Debug)]
pub struct GrabFailure {
    pub name: String,
    pub cause: GrabError,
}

impl GrabReport {
    /// Number of matches attempted
    pub fn attempted(&self) -> usize {
        self.downloaded.len() + self.failures.len()
    }

    /// Summary error when any download failed
    pub fn partial_error(&self) -> Option<GrabError> {
        if self.failures.is_empty() {
            None
        } else {
            Some(GrabError::Partial {
                failed: self.failures.len(),
                attempted: self.attempted(),
            })
        }
    }
}

/// Compiles glob patterns up front, so a bad pattern fails the whole grab
/// before any network call.
pub fn compile_patterns(patterns: &[String]) -> GrabResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| GrabError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Selects the descriptors matching any pattern, each at most once, in
/// first-match order.
pub fn select_matches<'a>(patterns: &[Pattern], files: &'a [LogFileInfo]) -> Vec<&'a LogFileInfo> {
    let mut selected: Vec<&LogFileInfo> = Vec::new();
    for pattern in patterns {
        for file in files {
            if pattern.matches(&file.name) && !selected.iter().any(|s| s.name == file.name) {
                selected.push(file);
            }
        }
    }
    selected
}

/// Patterns that matched no descriptor at all, for warning output
pub fn unmatched_patterns<'a>(patterns: &'a [Pattern], files: &[LogFileInfo]) -> Vec<&'a Pattern> {
    patterns
        .iter()
        .filter(|p| !files.iter().any(|f| p.matches(&f.name)))
        .collect()
}
