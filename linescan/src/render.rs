//! Plain-text report rendering for scan results.

use std::path::Path;

use console::Style;
use linescanlib::{FileStats, ScanResult};

/// Convert a path to a relative path from the base directory.
///
/// Falls back to the path as-is when it is not under `base`.
pub fn make_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}

/// Render the full report: aggregate totals first, then one block per
/// successfully analyzed file, in traversal order.
///
/// File paths are shown relative to `base` (the current working directory
/// in the CLI). Headers are styled bold when stdout is a terminal.
pub fn render_report(result: &ScanResult, base: &Path) -> String {
    let header = Style::new().bold();

    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("{}\n", header.apply_to("Project Statistics:")));
    output.push_str("===================\n");
    output.push_str(&format!("Total Files: {}\n", result.total.file_count));
    output.push_str(&format!("Total Lines: {}\n", result.total.counts.total()));
    output.push_str(&format!("Code Lines: {}\n", result.total.counts.code));
    output.push_str(&format!("Comment Lines: {}\n", result.total.counts.comments));
    output.push_str(&format!("Empty Lines: {}\n", result.total.counts.blank));

    output.push('\n');
    output.push_str(&format!(
        "{}\n",
        header.apply_to("Detailed File Statistics:")
    ));
    output.push_str("==========================\n");

    for file in &result.files {
        output.push_str(&render_file_block(file, base));
    }

    output
}

fn render_file_block(file: &FileStats, base: &Path) -> String {
    let mut block = String::new();

    block.push('\n');
    block.push_str(&format!("File: {}\n", make_relative(&file.path, base)));
    block.push_str(&format!("  Total Lines: {}\n", file.counts.total()));
    block.push_str(&format!("  Code Lines: {}\n", file.counts.code));
    block.push_str(&format!("  Comment Lines: {}\n", file.counts.comments));
    block.push_str(&format!("  Empty Lines: {}\n", file.counts.blank));

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use linescanlib::{FileStats, LineCounts, ProjectStats, SkippedFile};
    use std::path::PathBuf;

    fn sample_result() -> ScanResult {
        let counts = LineCounts {
            code: 1,
            comments: 1,
            blank: 1,
        };
        ScanResult {
            total: ProjectStats {
                file_count: 2,
                counts,
            },
            files: vec![FileStats::new(PathBuf::from("/work/a.ts"), counts)],
            skipped: vec![SkippedFile {
                path: PathBuf::from("/work/blob.bin"),
                reason: "stream did not contain valid UTF-8".to_string(),
            }],
        }
    }

    #[test]
    fn test_report_aggregate_block() {
        let report = render_report(&sample_result(), Path::new("/work"));

        assert!(report.contains("Project Statistics:"));
        assert!(report.contains("Total Files: 2"));
        assert!(report.contains("Total Lines: 3"));
        assert!(report.contains("Code Lines: 1"));
        assert!(report.contains("Comment Lines: 1"));
        assert!(report.contains("Empty Lines: 1"));
    }

    #[test]
    fn test_report_file_block_uses_relative_path() {
        let report = render_report(&sample_result(), Path::new("/work"));

        assert!(report.contains("File: a.ts"));
        assert!(report.contains("  Total Lines: 3"));
    }

    #[test]
    fn test_skipped_files_produce_no_block() {
        let report = render_report(&sample_result(), Path::new("/work"));

        // Two files discovered, one block printed
        assert!(!report.contains("blob.bin"));
        assert_eq!(report.matches("File: ").count(), 1);
    }

    #[test]
    fn test_make_relative_outside_base_keeps_path() {
        let path = Path::new("/elsewhere/b.ts");

        assert_eq!(make_relative(path, Path::new("/work")), "/elsewhere/b.ts");
    }
}
