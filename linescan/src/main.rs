//! # linescan
//!
//! CLI that walks a directory tree and reports how many lines of each file
//! are code, comments, or blank.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory
//! linescan
//!
//! # Scan another directory
//! linescan path/to/project
//!
//! # Exclude extra directory names (node_modules is always excluded)
//! linescan -e target -e vendor
//!
//! # Machine-readable output
//! linescan --output json
//! ```
//!
//! The traversal honors the root `.gitignore`, skips hidden entries, and
//! skips common metadata/lockfiles. Files that cannot be read are reported
//! on stderr and excluded from the line totals; they still count toward the
//! total file count.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use linescanlib::{scan_directory, ScanOptions};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linescan")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts code, comment, and blank lines under a directory")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("exclude-dir")
                .short('e')
                .long("exclude-dir")
                .action(ArgAction::Append)
                .help("Exclude a directory name in addition to the defaults (can be repeated)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let exclude_dirs: Vec<String> = matches
        .get_many::<String>("exclude-dir")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    // Canonicalize so report paths come out relative to the working
    // directory even when scanning "."
    let root =
        std::fs::canonicalize(path).with_context(|| format!("cannot resolve path '{path}'"))?;

    let options = ScanOptions::new().exclude_dirs(exclude_dirs);
    let result = scan_directory(&root, options)?;

    for skipped in &result.skipped {
        eprintln!(
            "Error reading file {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    if matches.get_one::<String>("output").map(String::as_str) == Some("json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        print!("{}", render::render_report(&result, &base));
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
