//! # skillcheck
//!
//! Static validator for a collection of agent skills.
//!
//! A collection is a directory whose immediate subdirectories each hold a
//! `SKILL.md`: a `---` delimited header with `name` and `description`, then
//! free-form documentation that may point at files under `references/`,
//! `scripts/` or `assets/`. Nothing is executed; the validator only checks
//! structure and cross-references.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillcheck::{config::Config, output, validate::collection::validate_collection};
//!
//! let config = Config::load(None)?;
//! let report = validate_collection(Path::new("./skills"), &config)?;
//! print!("{}", output::format_report(&report, &output::OutputFormat::Pretty));
//! std::process::exit(if report.passed { 0 } else { 1 });
//! # Ok::<(), skillcheck::Error>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]**: optional `skillcheck.toml` (limits, document name, check toggles).
//! 2. **[`validate`]**: frontmatter extraction, field checks, reference checks,
//!    and the collection pass with duplicate-name detection.
//! 3. **[`report`]**: [`report::Violation`] and [`report::ValidationReport`].
//! 4. **[`rules`]**: the rule catalogue behind `list-rules` and `explain`.
//! 5. **[`output`]**: pretty text, JSON, or [SARIF].
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod rules;
pub mod validate;

pub use error::{Error, Result};
