//! "Next" link rule: a line must point back to the level index

use regex::Regex;

use super::Rule;
use crate::model::{ProjectReadme, RuleKind, Violation};

pub struct NextLinkRule {
    pattern: Regex,
}

impl NextLinkRule {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Rule for NextLinkRule {
    fn id(&self) -> &str {
        "next-link"
    }

    fn name(&self) -> &str {
        "Next link"
    }

    fn description(&self) -> String {
        format!("Some line must match `{}`", self.pattern.as_str())
    }

    fn kind(&self) -> RuleKind {
        RuleKind::NextLink
    }

    fn evaluate(&self, readme: &ProjectReadme) -> Vec<Violation> {
        let found = readme
            .lines
            .iter()
            .any(|line| self.pattern.is_match(line.trim_end()));
        if found {
            Vec::new()
        } else {
            vec![Violation::new(RuleKind::NextLink, &readme.relative_path)]
        }
    }
}
