//! Terminal formatter.
//!
//! On failure: a header line, then one `- <document>: <message>` line per
//! violation, never truncated. On success: a single confirmation line.

use crate::report::ValidationReport;
use colored::Colorize;

pub const FAILURE_HEADER: &str = "Skill validation errors detected:";
pub const SUCCESS_LINE: &str = "OK: all SKILL.md files validated.";

pub fn format(report: &ValidationReport) -> String {
    if report.passed {
        return format!("{}\n", SUCCESS_LINE.green().bold());
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", FAILURE_HEADER.red().bold()));
    for violation in &report.violations {
        out.push_str(&format!("- {violation}\n"));
    }
    out
}
