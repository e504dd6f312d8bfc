//! Heuristic line classification.
//!
//! Classifies each line of a file as code, comment, or blank by matching
//! fixed pattern tables against the whitespace-trimmed line. The classifier
//! is language-agnostic: it does not know the file's actual language, does
//! not see comment markers inside string literals, and does not handle
//! comment syntaxes outside its tables. Those are accepted approximations,
//! not bugs.

use crate::stats::LineCounts;

/// Classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Whitespace-only line
    Blank,
    /// Single-line or block comment line
    Comment,
    /// Anything else
    Code,
}

/// Comment pattern tables consulted by [`LineClassifier`].
///
/// Line and block-start patterns match at the start of the trimmed line;
/// block-end patterns match at its end. The tables can be extended for
/// additional comment syntaxes without touching the classifier itself, but
/// the decision order (open block state, then line prefixes, then block
/// starts) is fixed because it breaks ties when several patterns match.
#[derive(Debug, Clone)]
pub struct CommentSyntax {
    /// Single-line comment prefixes
    pub line_prefixes: Vec<String>,
    /// Block comment opening prefixes
    pub block_starts: Vec<String>,
    /// Block comment closing suffixes
    pub block_ends: Vec<String>,
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self {
            line_prefixes: to_strings(&["//", "#", ";", "--", "%"]),
            block_starts: to_strings(&["/*", "<!--", "\"\"\""]),
            block_ends: to_strings(&["*/", "-->", "\"\"\""]),
        }
    }
}

fn to_strings(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|s| (*s).to_string()).collect()
}

impl CommentSyntax {
    /// Create the default pattern tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a single-line comment prefix
    pub fn with_line_prefix(mut self, prefix: &str) -> Self {
        self.line_prefixes.push(prefix.to_string());
        self
    }

    /// Builder: add a block comment start/end marker pair
    pub fn with_block_pair(mut self, start: &str, end: &str) -> Self {
        self.block_starts.push(start.to_string());
        self.block_ends.push(end.to_string());
        self
    }

    fn is_line_comment(&self, trimmed: &str) -> bool {
        self.line_prefixes.iter().any(|p| trimmed.starts_with(p.as_str()))
    }

    fn opens_block(&self, trimmed: &str) -> bool {
        self.block_starts.iter().any(|p| trimmed.starts_with(p.as_str()))
    }

    fn closes_block(&self, trimmed: &str) -> bool {
        self.block_ends.iter().any(|p| trimmed.ends_with(p.as_str()))
    }
}

/// Line classifier carrying block-comment state across lines.
///
/// The only state is `in_block_comment`, initially false. Feed lines in
/// file order; classifying out of order gives meaningless results.
#[derive(Debug)]
pub struct LineClassifier<'a> {
    syntax: &'a CommentSyntax,
    in_block_comment: bool,
}

impl<'a> LineClassifier<'a> {
    /// Create a classifier over the given pattern tables
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            syntax,
            in_block_comment: false,
        }
    }

    /// Classify one line.
    ///
    /// Whitespace-only lines are always blank, even inside an open block
    /// comment. The line that closes a block comment still counts as a
    /// comment line. A line that both opens and closes a block comment is
    /// consumed whole and does not leave block state open.
    pub fn classify(&mut self, line: &str) -> LineClass {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        if self.in_block_comment {
            if self.syntax.closes_block(trimmed) {
                self.in_block_comment = false;
            }
            return LineClass::Comment;
        }

        if self.syntax.is_line_comment(trimmed) {
            return LineClass::Comment;
        }

        if self.syntax.opens_block(trimmed) {
            if !self.syntax.closes_block(trimmed) {
                self.in_block_comment = true;
            }
            return LineClass::Comment;
        }

        LineClass::Code
    }
}

/// Count the lines of `content` by class.
///
/// Iterates with [`str::lines`]: an empty string has zero lines, and a
/// trailing newline does not produce a phantom blank line.
pub fn count_lines(content: &str, syntax: &CommentSyntax) -> LineCounts {
    let mut counts = LineCounts::new();
    let mut classifier = LineClassifier::new(syntax);

    for line in content.lines() {
        match classifier.classify(line) {
            LineClass::Blank => counts.blank += 1,
            LineClass::Comment => counts.comments += 1,
            LineClass::Code => counts.code += 1,
        }
    }

    counts
}
