//! Contract configuration
//!
//! The defaults encode the curriculum's project README contract. A tree may
//! carry a `.readme-contract.toml` at its root to adjust any field; the CLI
//! layers flag and environment overrides on top of that.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{ContractError, Result};

/// File name looked up at the scanned root
pub const CONFIG_FILE_NAME: &str = ".readme-contract.toml";

pub const DEFAULT_PROJECTS_DIR: &str = "projects";

pub const DEFAULT_HOME_LINK: &str = "Home: [README](../../../README.md)";

pub const DEFAULT_REPO_ROOT_NOTE: &str =
    "Use `<repo-root>` as the folder containing this repository's `README.md`.";

pub const DEFAULT_NEXT_LINK_PATTERN: &str =
    r"^Go back to \[Level [1-9][0-9]* index\]\(\.\./README\.md\)\.$";

pub const DEFAULT_EXPECTED_COUNT: usize = 165;

pub const DEFAULT_REQUIRED_HEADINGS: [&str; 9] = [
    "Run (copy/paste)",
    "Expected terminal output",
    "Expected artifacts",
    "Alter it (required)",
    "Break it (required)",
    "Fix it (required)",
    "Explain it (teach-back)",
    "Mastery check",
    "Next",
];

/// How the count invariant computes its expected total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedCount {
    /// A fixed total
    Fixed(usize),
    /// Discovered level directories times this many projects
    PerLevel(usize),
}

impl ExpectedCount {
    /// Resolve to a concrete total given the number of level directories found
    ///
    /// A per-level product too large for `usize` saturates; no tree can
    /// match it, so the count invariant reports the mismatch.
    pub fn resolve(&self, level_count: usize) -> usize {
        match *self {
            ExpectedCount::Fixed(n) => n,
            ExpectedCount::PerLevel(k) => level_count.saturating_mul(k),
        }
    }
}

impl Default for ExpectedCount {
    fn default() -> Self {
        ExpectedCount::Fixed(DEFAULT_EXPECTED_COUNT)
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedCount::Fixed(n) => write!(f, "{}", n),
            ExpectedCount::PerLevel(k) => write!(f, "{} per level", k),
        }
    }
}

/// The project README contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractConfig {
    /// Directory under the root holding the `level-*` directories
    pub projects_dir: String,
    /// Exact text line 2 must carry
    pub home_link: String,
    /// Level-2 headings every README must contain, without the `## ` marker
    pub required_headings: Vec<String>,
    /// Sentence explaining the `<repo-root>` placeholder
    pub repo_root_note: String,
    /// Regex a whole line must match for the "Next" link
    pub next_link_pattern: String,
    /// Count invariant, written `{ fixed = N }` or `{ per_level = K }` in every format
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub expected_count: ExpectedCount,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            projects_dir: DEFAULT_PROJECTS_DIR.to_string(),
            home_link: DEFAULT_HOME_LINK.to_string(),
            required_headings: DEFAULT_REQUIRED_HEADINGS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            repo_root_note: DEFAULT_REPO_ROOT_NOTE.to_string(),
            next_link_pattern: DEFAULT_NEXT_LINK_PATTERN.to_string(),
            expected_count: ExpectedCount::default(),
        }
    }
}

impl ContractConfig {
    /// Load a contract from a file, parsed by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ContractError::io_at(path, e))?;
        let config = Self::parse(path, &content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded contract configuration");
        Ok(config)
    }

    /// Load `<root>/.readme-contract.toml` if present, otherwise the defaults
    pub fn discover(root: &Path) -> Result<Self> {
        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(toml::from_str(content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(content)?),
            "json" => Ok(serde_json::from_str(content)?),
            _ => Err(ContractError::invalid_input(format!(
                "Unsupported config format: {}. Supported formats: toml, yaml, yml, json",
                path.display()
            ))),
        }
    }

    /// Reject contracts that could never be satisfied or evaluated
    pub fn validate(&self) -> Result<()> {
        if self.projects_dir.trim().is_empty() {
            return Err(ContractError::config("projects_dir must not be empty"));
        }
        if self.home_link.trim().is_empty() {
            return Err(ContractError::config("home_link must not be empty"));
        }
        if self.required_headings.is_empty() {
            return Err(ContractError::config("required_headings must not be empty"));
        }
        if let Some(blank) = self.required_headings.iter().find(|h| h.trim().is_empty()) {
            return Err(ContractError::config(format!(
                "required_headings contains a blank entry: {:?}",
                blank
            )));
        }
        if self.repo_root_note.trim().is_empty() {
            return Err(ContractError::config("repo_root_note must not be empty"));
        }
        self.next_link_regex()?;
        Ok(())
    }

    /// Compile the "Next" link pattern
    pub fn next_link_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.next_link_pattern)?)
    }

    pub fn with_expected_count(mut self, expected: ExpectedCount) -> Self {
        self.expected_count = expected;
        self
    }

    pub fn with_projects_dir(mut self, dir: impl Into<String>) -> Self {
        self.projects_dir = dir.into();
        self
    }
}
