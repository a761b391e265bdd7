//! Rule framework for the project README contract
//!
//! Each clause of the contract is one [`Rule`]. Rules are pure: they read a
//! [`ProjectReadme`] and return the violations they found, never touching
//! the file or each other.

pub mod headings;
pub mod home_link;
pub mod next_link;
pub mod repo_root_note;

use std::sync::Arc;

use crate::config::ContractConfig;
use crate::error::Result;
use crate::model::{ProjectReadme, RuleKind, Violation};

pub use headings::RequiredHeadingsRule;
pub use home_link::HomeLinkRule;
pub use next_link::NextLinkRule;
pub use repo_root_note::RepoRootNoteRule;

/// Trait for implementing contract rules
///
/// Evaluation is deterministic. A rule may report several violations for one
/// file (one per missing heading, for instance), and an empty vector means
/// the file satisfies the clause.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &str;

    /// Human-readable name for this rule
    fn name(&self) -> &str;

    /// Description of what this rule checks
    fn description(&self) -> String;

    /// Contract clause this rule enforces
    fn kind(&self) -> RuleKind;

    /// Evaluate the rule against one README
    fn evaluate(&self, readme: &ProjectReadme) -> Vec<Violation>;
}

/// A shared rule for dynamic dispatch
pub type SharedRule = Arc<dyn Rule>;

/// Build the four contract rules, in report order
pub fn default_rules(config: &ContractConfig) -> Result<Vec<SharedRule>> {
    let rules: Vec<SharedRule> = vec![
        Arc::new(HomeLinkRule::new(&config.home_link)),
        Arc::new(RequiredHeadingsRule::new(config.required_headings.clone())),
        Arc::new(RepoRootNoteRule::new(&config.repo_root_note)),
        Arc::new(NextLinkRule::new(config.next_link_regex()?)),
    ];
    Ok(rules)
}
