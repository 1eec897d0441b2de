//! JSON output formatter.

use crate::report::{ValidationReport, Violation};
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    root: &'a Path,
    checked_at: &'a str,
    documents_checked: usize,
    passed: bool,
    errors: Vec<String>,
    violations: &'a [Violation],
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// `errors` holds the same `<document>: <message>` strings as the pretty
/// output; `violations` adds the rule id for each.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let output = JsonOutput {
        root: &report.root,
        checked_at: &report.checked_at,
        documents_checked: report.documents_checked,
        passed: report.passed,
        errors: report.error_lines(),
        violations: &report.violations,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
