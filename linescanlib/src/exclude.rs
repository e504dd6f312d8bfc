//! Exclusion rules applied during traversal.
//!
//! An [`ExclusionSet`] bundles every rule the walker consults when deciding
//! whether to skip an entry: a fixed list of metadata filenames, the
//! hidden-entry rule, caller-supplied directory names, and the patterns of a
//! `.gitignore` found at the traversal root.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::LinescanError;
use crate::Result;

/// Filenames always excluded from scans: ecosystem metadata and lockfiles.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "tsconfig.json",
    "Cargo.lock",
    "yarn.lock",
];

/// Directory names excluded from traversal when the caller supplies none.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// The combined rule set deciding which paths the walker skips.
///
/// Immutable once built. An entry is skipped when ANY of the following
/// holds for it:
/// - its basename is in [`DEFAULT_EXCLUDED_FILES`],
/// - its basename starts with `.`,
/// - its root-relative path is ignored by the root `.gitignore`,
/// - its basename is in the excluded directory name list.
#[derive(Debug)]
pub struct ExclusionSet {
    excluded_files: &'static [&'static str],
    excluded_dirs: Vec<String>,
    gitignore: Gitignore,
}

impl ExclusionSet {
    /// Build the exclusion set for `root`.
    ///
    /// Loads `.gitignore` from `root` if present; an absent file means an
    /// empty matcher. Patterns match paths relative to `root`.
    pub fn build(root: &Path, excluded_dirs: &[String]) -> Result<Self> {
        let gitignore_path = root.join(".gitignore");
        let gitignore = if gitignore_path.is_file() {
            let mut builder = GitignoreBuilder::new(root);
            if let Some(source) = builder.add(&gitignore_path) {
                return Err(LinescanError::Gitignore {
                    path: gitignore_path,
                    source,
                });
            }
            builder.build().map_err(|source| LinescanError::Gitignore {
                path: gitignore_path,
                source,
            })?
        } else {
            Gitignore::empty()
        };

        Ok(Self {
            excluded_files: DEFAULT_EXCLUDED_FILES,
            excluded_dirs: excluded_dirs.to_vec(),
            gitignore,
        })
    }

    /// Check whether an entry should be skipped.
    ///
    /// `relative` is the entry's path relative to the traversal root;
    /// `name` is its basename. Directories that match are not descended
    /// into, so their contents never surface.
    pub fn is_excluded(&self, relative: &Path, name: &str, is_dir: bool) -> bool {
        self.excluded_files.contains(&name)
            || name.starts_with('.')
            || self.gitignore.matched(relative, is_dir).is_ignore()
            || self.excluded_dirs.iter().any(|dir| dir == name)
    }
}
