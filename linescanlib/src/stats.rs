//! Core data structures for line statistics

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line counts for a single file or an aggregate.
///
/// Classification is a partition: every line is exactly one of code,
/// comment, or blank, so `total()` is always the sum of the three fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    /// Content lines (not comments, not blanks)
    pub code: u64,
    /// Comment lines (single-line and block)
    pub comments: u64,
    /// Blank lines (whitespace only)
    pub blank: u64,
}

impl LineCounts {
    /// Create a new LineCounts with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines
    pub fn total(&self) -> u64 {
        self.code + self.comments + self.blank
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.blank += other.blank;
    }
}

/// Statistics for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path to the file
    pub path: PathBuf,
    /// Line counts for this file
    pub counts: LineCounts,
}

impl FileStats {
    /// Create new file stats
    pub fn new(path: PathBuf, counts: LineCounts) -> Self {
        Self { path, counts }
    }
}

/// Aggregate statistics for a whole scan.
///
/// `file_count` counts every discovered file, including files that later
/// failed to read; `counts` sums only the files that were actually analyzed.
/// The two can therefore disagree when files were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    /// Number of files discovered by traversal
    pub file_count: u64,
    /// Summed line counts across analyzed files
    pub counts: LineCounts,
}

impl ProjectStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }
}
