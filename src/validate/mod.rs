//! The validation pipeline.
//!
//! A document goes through three stages, each in its own module:
//!
//! 1. [`frontmatter`]: isolate the header block and parse `name` /
//!    `description`. A document without a header stops here with one
//!    violation.
//! 2. [`fields`]: presence, single-line, length, and name/folder checks.
//! 3. [`references`]: every `references/`, `scripts/` or `assets/` path in
//!    the body must exist inside the skill directory.
//!
//! [`collection`] runs the pipeline over every skill under a root and adds
//! the cross-document duplicate-name check.

pub mod collection;
pub mod fields;
pub mod frontmatter;
pub mod references;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::report::Violation;
use crate::rules;
use frontmatter::Fields;
use std::path::{Path, PathBuf};

/// A skill document loaded for validation.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path used for filesystem access.
    pub path: PathBuf,
    /// Path shown in violations, relative to the collection root.
    pub display: PathBuf,
    pub text: String,
}

impl Document {
    /// Reads `path` and labels it relative to `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read or is not UTF-8.
    pub fn read(root: &Path, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let display = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        Ok(Document {
            path: path.to_path_buf(),
            display,
            text,
        })
    }

    /// Directory holding the document.
    pub fn skill_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Name of the directory holding the document.
    pub fn folder_name(&self) -> String {
        let dir = self.skill_dir();
        let name = match dir.file_name() {
            Some(name) => Some(name.to_os_string()),
            // `.` and friends: use the resolved directory's name.
            None => dir
                .canonicalize()
                .ok()
                .and_then(|d| d.file_name().map(|n| n.to_os_string())),
        };
        let Some(name) = name else {
            return String::new();
        };
        if name.to_str().is_none() {
            tracing::warn!(dir = %dir.display(), "skill directory name is not valid UTF-8");
        }
        name.to_string_lossy().into_owned()
    }
}

/// Result of validating one document in isolation.
#[derive(Debug, Clone, Default)]
pub struct DocumentOutcome {
    pub violations: Vec<Violation>,
    /// Parsed fields; `None` when the document has no header block.
    pub fields: Option<Fields>,
}

impl DocumentOutcome {
    /// The declared name, when present and not blank.
    pub fn declared_name(&self) -> Option<&str> {
        self.fields.as_ref().and_then(Fields::declared_name)
    }
}

/// Validates a single document: header, fields, and body references.
///
/// ```
/// use skillcheck::config::Config;
/// use skillcheck::validate::{validate_document, Document};
///
/// let doc = Document {
///     path: "skills/demo/SKILL.md".into(),
///     display: "demo/SKILL.md".into(),
///     text: "no header here".to_string(),
/// };
/// let outcome = validate_document(&doc, &Config::default());
/// assert_eq!(outcome.violations.len(), 1);
/// assert!(outcome.fields.is_none());
/// ```
pub fn validate_document(doc: &Document, config: &Config) -> DocumentOutcome {
    let Some(fm) = frontmatter::extract(&doc.text) else {
        return DocumentOutcome {
            violations: vec![Violation::new(
                rules::MISSING_FRONTMATTER,
                &doc.display,
                "missing frontmatter block (--- ... --- at top of file)",
            )],
            fields: None,
        };
    };

    let parsed = Fields::parse(fm.block);
    let mut violations = fields::check_fields(&parsed, &doc.folder_name(), &doc.display, config);

    if config.checks.references {
        violations.extend(references::check_references(
            fm.body(&doc.text),
            doc.skill_dir(),
            &doc.display,
        ));
    }

    DocumentOutcome {
        violations,
        fields: Some(parsed),
    }
}
