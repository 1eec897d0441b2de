//! Per-field constraints on `name` and `description`.

use crate::config::Config;
use crate::report::{quoted, Violation};
use crate::rules;
use crate::validate::frontmatter::Fields;
use std::path::Path;

/// Checks one required field.
///
/// A missing or blank value yields a single violation. Otherwise the
/// single-line and length checks run independently, so both may fire.
/// Length counts characters of the value as parsed (after unquoting).
pub fn check_field(
    key: &str,
    value: Option<&str>,
    limit: usize,
    document: &Path,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            violations.push(Violation::new(
                rules::FIELD_MISSING,
                document,
                format!("missing/empty {key}"),
            ));
            return violations;
        }
    };

    if value.contains(['\n', '\r']) {
        violations.push(Violation::new(
            rules::FIELD_MULTILINE,
            document,
            format!("{key} must be single-line"),
        ));
    }

    let len = value.chars().count();
    if len > limit {
        violations.push(Violation::new(
            rules::FIELD_TOO_LONG,
            document,
            format!("{key} too long ({len}>{limit})"),
        ));
    }

    violations
}

/// Runs every field rule for one document.
///
/// `folder` is the name of the directory containing the document; when the
/// name-matches-folder check is enabled a declared `name` must equal it
/// exactly.
pub fn check_fields(
    fields: &Fields,
    folder: &str,
    document: &Path,
    config: &Config,
) -> Vec<Violation> {
    let mut violations = check_field(
        "name",
        fields.name.as_deref(),
        config.limits.name,
        document,
    );
    violations.extend(check_field(
        "description",
        fields.description.as_deref(),
        config.limits.description,
        document,
    ));

    if config.checks.name_matches_folder {
        if let Some(name) = fields.declared_name() {
            if name != folder {
                violations.push(Violation::new(
                    rules::NAME_FOLDER_MISMATCH,
                    document,
                    format!(
                        "name does not match folder ({} != {})",
                        quoted(name),
                        quoted(folder)
                    ),
                ));
            }
        }
    }

    violations
}
