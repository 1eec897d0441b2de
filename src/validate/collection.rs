//! Whole-collection validation.
//!
//! [`validate_collection`] is the main entry point: it enumerates the skill
//! directories under a root, validates each document, and checks that no two
//! skills declare the same name.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::report::{quoted, ValidationReport, Violation};
use crate::rules;
use crate::validate::{validate_document, Document};
use std::collections::hash_map::{Entry, HashMap};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// First claimant of each declared skill name within one run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    claims: HashMap<String, PathBuf>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `document` as the owner of `name` unless another document
    /// already holds it, in which case that earlier document is returned.
    pub fn claim(&mut self, name: &str, document: &Path) -> Option<&Path> {
        match self.claims.entry(name.to_string()) {
            Entry::Occupied(first) => Some(first.into_mut().as_path()),
            Entry::Vacant(slot) => {
                slot.insert(document.to_path_buf());
                None
            }
        }
    }
}

/// Returns the document path of every immediate subdirectory of `root` that
/// contains one, sorted by directory name.
///
/// # Errors
///
/// Returns [`Error::Walk`] if the root cannot be listed.
pub fn find_skill_documents(root: &Path, document_name: &str) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| Error::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        // `Path::is_dir` follows symlinks, so linked skill directories count.
        if !entry.path().is_dir() {
            continue;
        }
        let document = entry.path().join(document_name);
        if document.is_file() {
            documents.push(document);
        } else {
            tracing::debug!(dir = %entry.path().display(), "no skill document, skipping");
        }
    }
    Ok(documents)
}

/// Validates every skill under `root`.
///
/// Violations are grouped by document in sorted directory order. A document's
/// duplicate-name violation, if any, follows its other violations.
///
/// # Errors
///
/// Fails only on environment problems: a missing or non-directory root, an
/// enumeration failure, or an unreadable document.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skillcheck::{config::Config, validate::collection::validate_collection};
///
/// let report = validate_collection(Path::new("."), &Config::default())?;
/// for line in report.error_lines() {
///     println!("- {line}");
/// }
/// # Ok::<(), skillcheck::Error>(())
/// ```
pub fn validate_collection(root: &Path, config: &Config) -> Result<ValidationReport> {
    if !root.exists() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let documents = find_skill_documents(root, &config.document)?;
    let mut registry = NameRegistry::new();
    let mut violations = Vec::new();

    for path in &documents {
        let doc = Document::read(root, path)?;
        tracing::debug!(document = %doc.display.display(), "validating");
        let outcome = validate_document(&doc, config);
        violations.extend(outcome.violations.iter().cloned());

        if !config.checks.duplicate_names {
            continue;
        }
        if let Some(name) = outcome.declared_name() {
            if let Some(first) = registry.claim(name, &doc.display) {
                violations.push(Violation::new(
                    rules::DUPLICATE_NAME,
                    &doc.display,
                    format!(
                        "duplicate name {} (also {})",
                        quoted(name),
                        first.display()
                    ),
                ));
            }
        }
    }

    tracing::info!(
        root = %root.display(),
        documents = documents.len(),
        violations = violations.len(),
        "validation finished"
    );

    Ok(ValidationReport::new(root, documents.len(), violations))
}
