//! Required heading rule
//!
//! Every configured heading must appear as a level-2 heading (`## <text>`)
//! somewhere in the file. Missing headings are reported one by one, in the
//! configured order, so a single run lists all of them.

use std::collections::HashSet;

use super::Rule;
use crate::model::{ProjectReadme, RuleKind, Violation};

const HEADING_MARKER: &str = "## ";

pub struct RequiredHeadingsRule {
    headings: Vec<String>,
}

impl RequiredHeadingsRule {
    pub fn new<I, S>(headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headings: headings.into_iter().map(Into::into).collect(),
        }
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    fn present_headings(readme: &ProjectReadme) -> HashSet<&str> {
        readme
            .lines
            .iter()
            .filter_map(|line| line.trim_end().strip_prefix(HEADING_MARKER))
            .collect()
    }
}

impl Rule for RequiredHeadingsRule {
    fn id(&self) -> &str {
        "required-headings"
    }

    fn name(&self) -> &str {
        "Required headings"
    }

    fn description(&self) -> String {
        let list: Vec<String> = self
            .headings
            .iter()
            .map(|h| format!("`{}{}`", HEADING_MARKER, h))
            .collect();
        format!("Each heading must be present: {}", list.join(", "))
    }

    fn kind(&self) -> RuleKind {
        RuleKind::RequiredHeading
    }

    fn evaluate(&self, readme: &ProjectReadme) -> Vec<Violation> {
        let present = Self::present_headings(readme);
        self.headings
            .iter()
            .filter(|heading| !present.contains(heading.as_str()))
            .map(|heading| Violation::missing_heading(heading, &readme.relative_path))
            .collect()
    }
}
