//! File discovery under a traversal root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::LinescanError;
use crate::exclude::ExclusionSet;
use crate::Result;

/// Discover regular files under `root`, applying the exclusion rules.
///
/// Traversal is depth-first and iterative. Entries matched by the exclusion
/// set are neither recorded nor descended into. The returned list is sorted
/// lexicographically so downstream output is deterministic.
///
/// A walk error (unreadable directory, stat failure, symlink loop) aborts
/// the whole traversal; per-file read errors are handled later, during
/// analysis.
pub fn discover_files(root: impl AsRef<Path>, excludes: &ExclusionSet) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(LinescanError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Never filter the root itself
        if e.depth() == 0 {
            return true;
        }
        let relative = e.path().strip_prefix(root).unwrap_or_else(|_| e.path());
        let name = e.file_name().to_string_lossy();
        !excludes.is_excluded(relative, &name, e.file_type().is_dir())
    }) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn discover(root: &Path, exclude_dirs: &[&str]) -> Vec<PathBuf> {
        let dirs: Vec<String> = exclude_dirs.iter().map(|s| s.to_string()).collect();
        let excludes = ExclusionSet::build(root, &dirs).unwrap();
        discover_files(root, &excludes).unwrap()
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_discover_skips_all_exclusion_kinds() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("node_modules")).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::create_dir_all(temp.path().join("dist")).unwrap();
        fs::write(temp.path().join("node_modules/x.js"), "x();").unwrap();
        fs::write(temp.path().join(".git/config"), "[core]").unwrap();
        fs::write(temp.path().join("dist/out.js"), "out();").unwrap();
        fs::write(temp.path().join(".gitignore"), "dist/\n").unwrap();
        fs::write(temp.path().join("a.ts"), "let x = 1;").unwrap();

        let files = discover(temp.path(), &["node_modules"]);

        assert_eq!(names(&files), vec!["a.ts"]);
    }

    #[test]
    fn test_discover_skips_metadata_filenames() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("Cargo.lock"), "").unwrap();
        fs::write(temp.path().join("main.rs"), "fn main() {}").unwrap();

        let files = discover(temp.path(), &[]);

        assert_eq!(names(&files), vec!["main.rs"]);
    }

    #[test]
    fn test_discover_descends_into_subdirectories() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src/nested")).unwrap();
        fs::write(temp.path().join("src/a.rs"), "").unwrap();
        fs::write(temp.path().join("src/nested/b.rs"), "").unwrap();
        fs::write(temp.path().join("top.rs"), "").unwrap();

        let files = discover(temp.path(), &[]);

        assert!(files.iter().any(|p| p.ends_with("src/a.rs")));
        assert!(files.iter().any(|p| p.ends_with("src/nested/b.rs")));
        assert!(files.iter().any(|p| p.ends_with("top.rs")));
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_discover_gitignore_matches_nested_paths() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();
        fs::write(temp.path().join("sub/trace.log"), "line").unwrap();
        fs::write(temp.path().join("sub/keep.txt"), "line").unwrap();

        let files = discover(temp.path(), &[]);

        assert_eq!(names(&files), vec!["keep.txt"]);
    }

    #[test]
    fn test_discover_output_is_sorted() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("c.txt"), "").unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();

        let files = discover(temp.path(), &[]);

        assert_eq!(names(&files), vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_discover_nonexistent_root() {
        let excludes = ExclusionSet::build(Path::new("/nonexistent/path"), &[]).unwrap();
        let result = discover_files("/nonexistent/path", &excludes);

        assert!(matches!(result, Err(LinescanError::PathNotFound(_))));
    }

    #[test]
    fn test_discover_extra_excluded_dir() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("vendor")).unwrap();
        fs::write(temp.path().join("vendor/dep.go"), "package dep").unwrap();
        fs::write(temp.path().join("main.go"), "package main").unwrap();

        let without = discover(temp.path(), &[]);
        assert_eq!(without.len(), 2);

        let with = discover(temp.path(), &["vendor"]);
        assert_eq!(names(&with), vec!["main.go"]);
    }
}
