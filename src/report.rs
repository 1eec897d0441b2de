//! Violation and report types.
//!
//! A [`Violation`] is one broken rule in one document. The collection pass
//! gathers them into a [`ValidationReport`], which every output format renders.

use std::fmt;
use std::path::{Path, PathBuf};

/// One violated rule in one document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    pub rule_id: &'static str,
    /// Document path relative to the collection root, e.g. `alpha/SKILL.md`.
    pub document: PathBuf,
    pub message: String,
}

impl Violation {
    pub fn new(rule_id: &'static str, document: &Path, message: impl Into<String>) -> Self {
        Violation {
            rule_id,
            document: document.to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.document.display(), self.message)
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ValidationReport {
    pub root: PathBuf,
    pub checked_at: String,
    pub documents_checked: usize,
    pub violations: Vec<Violation>,
    pub passed: bool,
}

impl ValidationReport {
    pub fn new(root: &Path, documents_checked: usize, violations: Vec<Violation>) -> Self {
        let passed = violations.is_empty();
        ValidationReport {
            root: root.to_path_buf(),
            checked_at: chrono::Utc::now().to_rfc3339(),
            documents_checked,
            violations,
            passed,
        }
    }

    /// The `<document>: <message>` lines, in report order.
    pub fn error_lines(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn violations_for<'a>(&'a self, document: &'a Path) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.document == document)
    }
}

/// Quotes a field value for a violation message.
///
/// Single quotes are used unless the value contains a single quote and no
/// double quote. Backslashes, control whitespace and the chosen quote are
/// escaped so a stray `\r` stays visible.
///
/// ```
/// use skillcheck::report::quoted;
///
/// assert_eq!(quoted("demo"), "'demo'");
/// assert_eq!(quoted("it's"), "\"it's\"");
/// assert_eq!(quoted("it's \"x\""), "'it\\'s \"x\"'");
/// ```
pub fn quoted(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
