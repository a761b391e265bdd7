//! `<repo-root>` placeholder note rule

use super::Rule;
use crate::model::{ProjectReadme, RuleKind, Violation};

pub struct RepoRootNoteRule {
    note: String,
}

impl RepoRootNoteRule {
    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }
}

impl Rule for RepoRootNoteRule {
    fn id(&self) -> &str {
        "repo-root-note"
    }

    fn name(&self) -> &str {
        "Repo root note"
    }

    fn description(&self) -> String {
        format!("The sentence `{}` must appear verbatim", self.note)
    }

    fn kind(&self) -> RuleKind {
        RuleKind::RepoRootNote
    }

    fn evaluate(&self, readme: &ProjectReadme) -> Vec<Violation> {
        if readme.text().contains(&self.note) {
            Vec::new()
        } else {
            vec![Violation::new(RuleKind::RepoRootNote, &readme.relative_path)]
        }
    }
}
