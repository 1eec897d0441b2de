//! Rule catalogue.
//!
//! Every [`Violation`](crate::report::Violation) carries one of the ids
//! below. The catalogue backs the `list-rules` and `explain` commands and the
//! rule table in SARIF output.

pub const MISSING_FRONTMATTER: &str = "frontmatter/missing-block";
pub const FIELD_MISSING: &str = "field/missing";
pub const FIELD_MULTILINE: &str = "field/multiline";
pub const FIELD_TOO_LONG: &str = "field/too-long";
pub const NAME_FOLDER_MISMATCH: &str = "field/name-folder-mismatch";
pub const REFERENCE_INVALID: &str = "reference/invalid-path";
pub const REFERENCE_ESCAPES: &str = "reference/escapes-skill-dir";
pub const REFERENCE_MISSING: &str = "reference/missing-file";
pub const DUPLICATE_NAME: &str = "collection/duplicate-name";

/// Metadata for a single validation rule.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"field/too-long"`).
    pub id: &'static str,
    /// Component that reports this rule.
    pub area: &'static str,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Returns every rule, grouped by area in pipeline order.
pub fn all_rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: MISSING_FRONTMATTER,
            area: "frontmatter",
            message: "SKILL.md must start with a --- delimited frontmatter block",
            remediation: "Put '---', the name and description lines, and a closing '---' at the very top of the file",
        },
        RuleInfo {
            id: FIELD_MISSING,
            area: "field",
            message: "name and description must be present and non-blank",
            remediation: "Add 'name: <value>' and 'description: <value>' lines to the frontmatter",
        },
        RuleInfo {
            id: FIELD_MULTILINE,
            area: "field",
            message: "name and description must fit on a single line",
            remediation: "Remove line breaks (including stray carriage returns) from the field value",
        },
        RuleInfo {
            id: FIELD_TOO_LONG,
            area: "field",
            message: "name must be at most 100 characters and description at most 500",
            remediation: "Shorten the field; limits can be changed under [limits] in skillcheck.toml",
        },
        RuleInfo {
            id: NAME_FOLDER_MISMATCH,
            area: "field",
            message: "name must equal the directory that contains SKILL.md",
            remediation: "Rename the skill directory or change the name field so they match exactly",
        },
        RuleInfo {
            id: REFERENCE_INVALID,
            area: "reference",
            message: "referenced path is absolute or contains '..'",
            remediation: "Reference files relative to the skill directory without parent segments",
        },
        RuleInfo {
            id: REFERENCE_ESCAPES,
            area: "reference",
            message: "referenced path resolves outside the skill directory",
            remediation: "Move the file into the skill directory instead of linking to it",
        },
        RuleInfo {
            id: REFERENCE_MISSING,
            area: "reference",
            message: "referenced file under references/, scripts/ or assets/ does not exist",
            remediation: "Add the missing file or fix the path in SKILL.md",
        },
        RuleInfo {
            id: DUPLICATE_NAME,
            area: "collection",
            message: "two skills declare the same name",
            remediation: "Give each skill a unique name",
        },
    ]
}

/// Looks up a rule by id.
pub fn find_rule(id: &str) -> Option<RuleInfo> {
    all_rules().into_iter().find(|r| r.id == id)
}
