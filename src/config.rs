//! Configuration loading.
//!
//! Every setting has a default, so the config file is optional. The default
//! file is `skillcheck.toml` in the current working directory. Use
//! [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use skillcheck::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert_eq!(config.limits.name, 100);
//! ```

use crate::error::{Error, Result};
use std::path::Path;

/// Name of the config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "skillcheck.toml";

/// Main configuration for a validation run.
///
/// # Examples
///
/// ```toml
/// document = "SKILL.md"
///
/// [limits]
/// description = 300
///
/// [checks]
/// references = false
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// File name of the document inside each skill directory.
    pub document: String,
    /// Maximum field lengths, in characters.
    pub limits: LimitsConfig,
    /// Per-check on/off toggles.
    pub checks: ChecksConfig,
}

/// Maximum lengths for the required frontmatter fields.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub name: usize,
    pub description: usize,
}

/// Toggles for the checks that go beyond field presence and length.
///
/// Every check defaults to **enabled**. Presence, single-line and length
/// checks on `name` and `description` always run.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// `name` must equal the directory that holds the document.
    pub name_matches_folder: bool,
    /// Paths under `references/`, `scripts/` and `assets/` mentioned in the
    /// body must exist inside the skill directory.
    pub references: bool,
    /// No two skills may declare the same `name`.
    pub duplicate_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            document: "SKILL.md".to_string(),
            limits: LimitsConfig::default(),
            checks: ChecksConfig::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            name: 100,
            description: 500,
        }
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            name_matches_folder: true,
            references: true,
            duplicate_names: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] when an explicit path does not exist,
    /// [`Error::ConfigRead`] when the file cannot be read, and
    /// [`Error::ConfigParse`] when the TOML is malformed.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(Error::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        match config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let content = std::fs::read_to_string(&path).map_err(|source| {
                    Error::ConfigRead {
                        path: path.clone(),
                        source,
                    }
                })?;
                Config::from_toml(&content).map_err(|source| Error::ConfigParse { path, source })
            }
            None => Ok(Config::default()),
        }
    }

    /// Parses configuration from a TOML string. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> std::result::Result<Config, toml::de::Error> {
        toml::from_str(content)
    }
}
