//! High-level scan API.
//!
//! This module provides the main entry points for scanning a directory
//! tree: traversal produces the file list once, then analysis consumes it
//! in a single pass, folding per-file counts into an immutable aggregate.
//! The library performs no terminal output; read failures are returned as
//! data for the caller to surface.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::{count_lines, CommentSyntax};
use crate::error::LinescanError;
use crate::exclude::{ExclusionSet, DEFAULT_EXCLUDED_DIRS};
use crate::stats::{FileStats, ProjectStats};
use crate::walker::discover_files;
use crate::Result;

/// Options for a directory scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names excluded from traversal
    pub exclude_dirs: Vec<String>,
    /// Comment pattern tables used for classification
    pub syntax: CommentSyntax,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            exclude_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            syntax: CommentSyntax::default(),
        }
    }
}

impl ScanOptions {
    /// Create new default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude additional directory names, on top of the defaults
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.exclude_dirs.extend(names);
        self
    }

    /// Replace the comment pattern tables
    pub fn syntax(mut self, syntax: CommentSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

/// A file that was discovered but could not be analyzed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path to the file
    pub path: PathBuf,
    /// Why the read failed
    pub reason: String,
}

/// Result of scanning a directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// Aggregate statistics; `file_count` includes skipped files
    pub total: ProjectStats,
    /// Per-file statistics, in traversal order
    pub files: Vec<FileStats>,
    /// Files that failed to read and contribute no line counts
    pub skipped: Vec<SkippedFile>,
}

impl ScanResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }
}

/// Scan a directory tree and classify every line of the surviving files.
///
/// This is the main entry point. It:
/// 1. Builds the exclusion set (fixed filenames, hidden entries, excluded
///    directory names, root `.gitignore`)
/// 2. Walks the tree once, collecting the file list
/// 3. Analyzes each file, skipping unreadable ones
///
/// # Example
///
/// ```rust
/// use linescanlib::{scan_directory, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("app.ts"), "// entry\n\nlet x = 1;\n").unwrap();
///
/// let result = scan_directory(dir.path(), ScanOptions::new()).unwrap();
/// assert_eq!(result.total.file_count, 1);
/// assert_eq!(result.total.counts.code, 1);
/// assert_eq!(result.total.counts.comments, 1);
/// assert_eq!(result.total.counts.blank, 1);
/// ```
pub fn scan_directory(root: impl AsRef<Path>, options: ScanOptions) -> Result<ScanResult> {
    let root = root.as_ref();

    let excludes = ExclusionSet::build(root, &options.exclude_dirs)?;
    let entries = discover_files(root, &excludes)?;

    Ok(analyze_files(&entries, &options.syntax))
}

/// Analyze a list of files, folding per-file counts into an aggregate.
///
/// Every path is counted in `total.file_count`, but a file that fails to
/// read is recorded in `skipped` and contributes nothing to the line
/// totals, so `file_count` can exceed `files.len()`.
pub fn analyze_files(paths: &[PathBuf], syntax: &CommentSyntax) -> ScanResult {
    let mut result = ScanResult::new();
    result.total.file_count = paths.len() as u64;

    for path in paths {
        match analyze_file(path, syntax) {
            Ok(stats) => {
                result.total.counts += stats.counts;
                result.files.push(stats);
            }
            Err(err) => {
                let reason = match &err {
                    LinescanError::FileRead { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                result.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason,
                });
            }
        }
    }

    result
}

/// Analyze a single file.
///
/// The file is read whole as UTF-8; the handle is released before the
/// function returns. Missing files, permission errors, and non-UTF-8
/// content all surface as [`LinescanError::FileRead`].
pub fn analyze_file(path: impl AsRef<Path>, syntax: &CommentSyntax) -> Result<FileStats> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| LinescanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileStats::new(path.to_path_buf(), count_lines(&content, syntax)))
}
