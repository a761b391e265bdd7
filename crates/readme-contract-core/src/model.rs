//! Data model for a verification pass
//!
//! A pass discovers [`ProjectReadme`] files, evaluates every rule against
//! each of them and folds the outcome into a [`RunResult`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Summary line printed when the whole tree satisfies the contract
pub const SUCCESS_PREFIX: &str = "project README contract verified";

/// Summary line printed when any violation or count mismatch was found
pub const FAILURE_LINE: &str = "project README contract check failed";

/// One per-project instruction file, read once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReadme {
    /// Location on disk
    pub path: PathBuf,
    /// Path relative to the scanned root, always `/`-separated
    pub relative_path: String,
    /// Text after `level-` in the level directory name
    pub level: String,
    /// File contents split into lines
    pub lines: Vec<String>,
}

impl ProjectReadme {
    /// Build a README from its location and raw contents
    pub fn new(
        path: impl Into<PathBuf>,
        relative_path: impl Into<String>,
        level: impl Into<String>,
        contents: &str,
    ) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
            level: level.into(),
            lines: contents.lines().map(str::to_string).collect(),
        }
    }

    /// 1-based line lookup
    pub fn line(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// Full text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// The clauses of the project README contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Line 2 links back to the top-level README
    HomeLink,
    /// A fixed level-2 heading is present
    RequiredHeading,
    /// The `<repo-root>` instruction sentence is present
    RepoRootNote,
    /// A "Go back to [Level N index]" line is present
    NextLink,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::HomeLink => write!(f, "home-link"),
            RuleKind::RequiredHeading => write!(f, "required-heading"),
            RuleKind::RepoRootNote => write!(f, "repo-root-note"),
            RuleKind::NextLink => write!(f, "next-link"),
        }
    }
}

/// A single (file, rule) pair that did not hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Which clause failed
    pub rule: RuleKind,
    /// Relative path of the offending file
    pub path: String,
    /// Heading text, set only for [`RuleKind::RequiredHeading`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

impl Violation {
    pub fn new(rule: RuleKind, path: impl Into<String>) -> Self {
        Self {
            rule,
            path: path.into(),
            heading: None,
        }
    }

    pub fn missing_heading(heading: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            rule: RuleKind::RequiredHeading,
            path: path.into(),
            heading: Some(heading.into()),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            RuleKind::HomeLink => write!(f, "bad home link: {}", self.path),
            RuleKind::RequiredHeading => write!(
                f,
                "missing heading '## {}': {}",
                self.heading.as_deref().unwrap_or_default(),
                self.path
            ),
            RuleKind::RepoRootNote => write!(f, "missing <repo-root> note: {}", self.path),
            RuleKind::NextLink => write!(f, "bad next link format: {}", self.path),
        }
    }
}

/// The discovered total disagreed with the expected total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMismatch {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected project README count: expected {}, found {}",
            self.expected, self.found
        )
    }
}

/// Aggregate outcome of one verification pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Number of README files discovered
    pub total_count: usize,
    /// Number the count invariant requires
    pub expected_count: usize,
    /// Every rule violation, in discovery order
    pub violations: Vec<Violation>,
    /// Set when `total_count != expected_count`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_mismatch: Option<CountMismatch>,
}

impl RunResult {
    pub fn new(total_count: usize, expected_count: usize, violations: Vec<Violation>) -> Self {
        let count_mismatch = (total_count != expected_count).then_some(CountMismatch {
            expected: expected_count,
            found: total_count,
        });
        Self {
            total_count,
            expected_count,
            violations,
            count_mismatch,
        }
    }

    /// True when no violation was collected and the count invariant holds
    pub fn passed(&self) -> bool {
        self.violations.is_empty() && self.count_mismatch.is_none()
    }

    /// Violations recorded against one file
    pub fn violations_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.path == path)
    }

    /// Final verdict line
    pub fn summary_line(&self) -> String {
        if self.passed() {
            format!("{} (count={})", SUCCESS_PREFIX, self.total_count)
        } else {
            FAILURE_LINE.to_string()
        }
    }

    /// The full text report: violations, count mismatch, then the verdict
    ///
    /// A failing run names the discovered total on its own `count=<N>` line,
    /// since the failure verdict itself carries no count.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        if let Some(mismatch) = &self.count_mismatch {
            lines.push(mismatch.to_string());
        }
        if !self.passed() {
            lines.push(format!("count={}", self.total_count));
        }
        lines.push(self.summary_line());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lookup_is_one_based() {
        let readme = ProjectReadme::new(
            "/tmp/x/README.md",
            "projects/level-1/01-hello/README.md",
            "1",
            "# Title\r\nHome: link\n",
        );
        assert_eq!(readme.line(1), Some("# Title"));
        assert_eq!(readme.line(2), Some("Home: link"));
        assert_eq!(readme.line(0), None);
        assert_eq!(readme.line(3), None);
    }

    #[test]
    fn test_violation_lines() {
        let path = "projects/level-2/03-x/README.md";
        assert_eq!(
            Violation::new(RuleKind::HomeLink, path).to_string(),
            format!("bad home link: {path}")
        );
        assert_eq!(
            Violation::missing_heading("Mastery check", path).to_string(),
            format!("missing heading '## Mastery check': {path}")
        );
        assert_eq!(
            Violation::new(RuleKind::RepoRootNote, path).to_string(),
            format!("missing <repo-root> note: {path}")
        );
        assert_eq!(
            Violation::new(RuleKind::NextLink, path).to_string(),
            format!("bad next link format: {path}")
        );
    }

    #[test]
    fn test_passing_result_report() {
        let result = RunResult::new(165, 165, vec![]);
        assert!(result.passed());
        assert_eq!(
            result.report_lines(),
            vec!["project README contract verified (count=165)".to_string()]
        );
    }

    #[test]
    fn test_count_mismatch_alone_fails() {
        let result = RunResult::new(164, 165, vec![]);
        assert!(!result.passed());
        assert_eq!(
            result.report_lines(),
            vec![
                "unexpected project README count: expected 165, found 164".to_string(),
                "count=164".to_string(),
                FAILURE_LINE.to_string(),
            ]
        );
    }

    #[test]
    fn test_violations_precede_mismatch() {
        let result = RunResult::new(
            2,
            3,
            vec![Violation::new(RuleKind::NextLink, "a/README.md")],
        );
        let lines = result.report_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("bad next link format"));
        assert!(lines[1].starts_with("unexpected project README count"));
        assert_eq!(lines[2], "count=2");
        assert_eq!(lines[3], FAILURE_LINE);
    }

    #[test]
    fn test_rule_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&RuleKind::RepoRootNote).unwrap();
        assert_eq!(json, "\"repo-root-note\"");
    }
}
