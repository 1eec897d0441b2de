//! Auxiliary-file references in the document body.
//!
//! Any substring shaped like `references/...`, `scripts/...` or `assets/...`
//! is a candidate, including ones inside code spans and fenced blocks. Each
//! distinct candidate must be a relative path without `..` segments that
//! resolves to an existing entry inside the skill directory.

use crate::report::Violation;
use crate::rules;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

static RE_REFERENCE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?:references|scripts|assets)/[A-Za-z0-9][A-Za-z0-9_.\\/-]*").unwrap()
});

/// Outcome of checking one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    /// Absolute, or contains a `..` segment. Never touches the filesystem.
    Invalid,
    /// Resolves outside the skill directory (e.g. through a symlink).
    EscapesSkillDir,
    Missing,
}

/// Collects the distinct reference candidates in `body`, sorted.
///
/// ```
/// use skillcheck::validate::references::scan;
///
/// let body = "See references/api.md and `scripts/run.sh`, then references/api.md again.";
/// let found: Vec<_> = scan(body).into_iter().collect();
/// assert_eq!(found, ["references/api.md", "scripts/run.sh"]);
/// ```
pub fn scan(body: &str) -> BTreeSet<&str> {
    RE_REFERENCE.find_iter(body).map(|m| m.as_str()).collect()
}

/// Checks a single raw reference against `skill_dir`.
///
/// `skill_root` is the resolved form of `skill_dir` (see [`resolve`]).
pub fn check_reference(skill_dir: &Path, skill_root: &Path, raw: &str) -> Verdict {
    let normalized = raw.replace('\\', "/");
    let relative = Path::new(&normalized);

    if relative.is_absolute()
        || normalized.starts_with('/')
        || normalized.split('/').any(|seg| seg == "..")
    {
        return Verdict::Invalid;
    }

    let resolved = resolve(&skill_dir.join(relative));
    if !resolved.starts_with(skill_root) {
        return Verdict::EscapesSkillDir;
    }

    if resolved.exists() {
        Verdict::Ok
    } else {
        Verdict::Missing
    }
}

/// Checks every reference in `body` and reports the failures in sorted order.
pub fn check_references(body: &str, skill_dir: &Path, document: &Path) -> Vec<Violation> {
    let skill_root = resolve(skill_dir);
    let mut violations = Vec::new();

    for raw in scan(body) {
        let verdict = check_reference(skill_dir, &skill_root, raw);
        tracing::debug!(document = %document.display(), reference = raw, ?verdict, "checked reference");
        let violation = match verdict {
            Verdict::Ok => continue,
            Verdict::Invalid => Violation::new(
                rules::REFERENCE_INVALID,
                document,
                format!("invalid referenced path {raw}"),
            ),
            Verdict::EscapesSkillDir => Violation::new(
                rules::REFERENCE_ESCAPES,
                document,
                format!("invalid referenced path {raw} (escapes skill dir)"),
            ),
            Verdict::Missing => Violation::new(
                rules::REFERENCE_MISSING,
                document,
                format!("missing referenced file {raw}"),
            ),
        };
        violations.push(violation);
    }

    violations
}

/// Symlink hops followed through dangling links before giving up.
const MAX_SYMLINK_HOPS: usize = 40;

/// Canonicalizes `path` without requiring it to exist.
///
/// The longest existing prefix is canonicalized (following symlinks) and the
/// remaining components are appended unchanged. A dangling symlink on the way
/// is followed to its target, so a link pointing outside the skill directory
/// resolves outside it even when the target is missing. If no prefix exists
/// the path is returned as given.
pub fn resolve(path: &Path) -> PathBuf {
    resolve_within(path, MAX_SYMLINK_HOPS)
}

fn resolve_within(path: &Path, hops: usize) -> PathBuf {
    let mut existing = path;
    let mut tail: Vec<OsString> = Vec::new();

    loop {
        if let Ok(mut resolved) = existing.canonicalize() {
            for component in tail.iter().rev() {
                resolved.push(component);
            }
            return resolved;
        }
        if hops > 0 {
            if let Some(mut target) = dangling_link_target(existing) {
                for component in tail.iter().rev() {
                    target.push(component);
                }
                return resolve_within(&target, hops - 1);
            }
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

/// Target of `path` when it is a symlink, rebased on the link's directory.
fn dangling_link_target(path: &Path) -> Option<PathBuf> {
    let meta = std::fs::symlink_metadata(path).ok()?;
    if !meta.file_type().is_symlink() {
        return None;
    }
    let target = std::fs::read_link(path).ok()?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Some(normalize_lexically(&base.join(target)))
}

/// Drops `.` components and folds `..` into the preceding component.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
