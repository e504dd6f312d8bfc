//! Error types for linescanlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during traversal and analysis
#[derive(Error, Debug)]
pub enum LinescanError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Failed to load or compile .gitignore patterns
    #[error("failed to load gitignore '{path}': {source}")]
    Gitignore {
        path: PathBuf,
        source: ignore::Error,
    },

    /// Directory traversal failed
    #[error("traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
