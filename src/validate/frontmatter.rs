//! Frontmatter extraction and field parsing.
//!
//! The header of a `SKILL.md` is a plain `---` delimited block at offset 0.
//! Only two scalar fields are read from it (`name` and `description`); other
//! keys are ignored. This is deliberately not a YAML parser: values are taken
//! from single `key: value` lines and at most one layer of matching quotes is
//! removed.

use std::sync::LazyLock;

/// Opening delimiter, lazily-matched block, closing delimiter. Both delimiters
/// may carry trailing whitespace; the first closing delimiter wins.
static RE_FRONTMATTER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").unwrap());

/// The header block of a document and where its body starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    pub block: &'a str,
    /// Byte offset of the first body character in the original text.
    pub body_offset: usize,
}

impl<'a> Frontmatter<'a> {
    /// Everything after the closing delimiter.
    pub fn body(&self, text: &'a str) -> &'a str {
        &text[self.body_offset..]
    }
}

/// Isolates the header block at the very start of `text`.
///
/// Returns `None` when the text does not open with a delimiter pair; there is
/// no fallback search further into the document.
///
/// ```
/// use skillcheck::validate::frontmatter::extract;
///
/// let text = "---\nname: demo\n---\n# Demo\n";
/// let fm = extract(text).unwrap();
/// assert_eq!(fm.block, "name: demo");
/// assert_eq!(fm.body(text), "# Demo\n");
/// assert!(extract("# Demo\n---\nname: demo\n---\n").is_none());
/// ```
pub fn extract(text: &str) -> Option<Frontmatter<'_>> {
    let caps = RE_FRONTMATTER.captures(text)?;
    let block = caps.get(1)?.as_str();
    let body_offset = caps.get(0)?.end();
    Some(Frontmatter { block, body_offset })
}

/// Returns the value of the first `key: value` line in `block`.
///
/// The key must start the line and is case-sensitive. Lines with nothing at
/// all after the colon do not count as a match, so scanning continues. The
/// returned value is trimmed and unquoted by [`strip_quotes`].
///
/// ```
/// use skillcheck::validate::frontmatter::field;
///
/// let block = "name: \"demo\"\ndescription: first\ndescription: second";
/// assert_eq!(field(block, "name").as_deref(), Some("demo"));
/// assert_eq!(field(block, "description").as_deref(), Some("first"));
/// assert_eq!(field(block, "license"), None);
/// ```
pub fn field(block: &str, key: &str) -> Option<String> {
    block.split('\n').find_map(|line| {
        let raw = line.strip_prefix(key)?.strip_prefix(':')?;
        if raw.is_empty() {
            return None;
        }
        Some(strip_quotes(raw).to_string())
    })
}

/// Trims `value` and peels one layer of matching `"` or `'` quotes.
///
/// The unquoted text is trimmed again. Nested quotes are left alone.
pub fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // A lone quote character is both the opening and the closing one.
            let inner = value.get(1..value.len().saturating_sub(1)).unwrap_or("");
            return inner.trim();
        }
    }
    value
}

/// The two fields every skill must declare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Fields {
    pub fn parse(block: &str) -> Self {
        Fields {
            name: field(block, "name"),
            description: field(block, "description"),
        }
    }

    /// The `name` value, if present and not blank.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}
