//! # linescanlib
//!
//! A directory-walking line counter library that classifies every line of
//! every discovered text file as code, comment, or blank.
//!
//! ## Overview
//!
//! Two components compose sequentially:
//!
//! - **Walker**: traverses a root directory, applying an [`ExclusionSet`]
//!   (fixed metadata filenames, hidden entries, excluded directory names,
//!   and the root `.gitignore`), and returns a sorted file list.
//! - **Scanner**: reads each file and classifies its lines through a small
//!   state machine driven by configurable [`CommentSyntax`] pattern tables,
//!   folding the counts into an immutable [`ScanResult`].
//!
//! Classification is heuristic and language-agnostic: markers are matched
//! against the trimmed line, so comment markers inside string literals are
//! miscounted by design. Unreadable files are skipped and reported as data;
//! traversal failures abort the scan.
//!
//! ## Example
//!
//! ```rust
//! use linescanlib::{scan_directory, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join(".gitignore"), "dist/\n").unwrap();
//! fs::create_dir(dir.path().join("dist")).unwrap();
//! fs::write(dir.path().join("dist/out.js"), "built();\n").unwrap();
//! fs::write(dir.path().join("app.ts"), "// entry\nlet x = 1;\n").unwrap();
//!
//! let result = scan_directory(dir.path(), ScanOptions::new()).unwrap();
//! assert_eq!(result.total.file_count, 1);
//! assert_eq!(result.total.counts.code, 1);
//! assert_eq!(result.total.counts.comments, 1);
//! ```

pub mod classify;
pub mod error;
pub mod exclude;
pub mod scanner;
pub mod stats;
pub mod walker;

pub use classify::{count_lines, CommentSyntax, LineClass, LineClassifier};
pub use error::LinescanError;
pub use exclude::{ExclusionSet, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES};
pub use scanner::{
    analyze_file, analyze_files, scan_directory, ScanOptions, ScanResult, SkippedFile,
};
pub use stats::{FileStats, LineCounts, ProjectStats};
pub use walker::discover_files;

/// Result type for linescanlib operations
pub type Result<T> = std::result::Result<T, LinescanError>;
