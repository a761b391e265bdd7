//! Home link rule: line 2 must link back to the top-level README

use super::Rule;
use crate::model::{ProjectReadme, RuleKind, Violation};

/// Line of the README that carries the home link
const HOME_LINK_LINE: usize = 2;

pub struct HomeLinkRule {
    expected: String,
}

impl HomeLinkRule {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Rule for HomeLinkRule {
    fn id(&self) -> &str {
        "home-link"
    }

    fn name(&self) -> &str {
        "Home link"
    }

    fn description(&self) -> String {
        format!("Line {} must read exactly `{}`", HOME_LINK_LINE, self.expected)
    }

    fn kind(&self) -> RuleKind {
        RuleKind::HomeLink
    }

    fn evaluate(&self, readme: &ProjectReadme) -> Vec<Violation> {
        if readme.line(HOME_LINK_LINE) == Some(self.expected.as_str()) {
            Vec::new()
        } else {
            vec![Violation::new(RuleKind::HomeLink, &readme.relative_path)]
        }
    }
}
