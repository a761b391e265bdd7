//! Verification engine
//!
//! Runs every registered rule against every discovered README and folds the
//! results, together with the count invariant, into a [`RunResult`]. Nothing
//! short-circuits: a single pass reports every problem in the tree.

use std::path::Path;

use crate::config::ContractConfig;
use crate::discovery::{self, Discovery};
use crate::error::Result;
use crate::model::{ProjectReadme, RunResult};
use crate::rules::{self, SharedRule};

/// The contract verifier
pub struct Verifier {
    config: ContractConfig,
    rules: Vec<SharedRule>,
}

impl Verifier {
    /// Create a verifier enforcing the given contract with the default rules
    pub fn from_config(config: ContractConfig) -> Result<Self> {
        config.validate()?;
        let rules = rules::default_rules(&config)?;
        Ok(Self { config, rules })
    }

    /// Create a verifier with no rules, enforcing only the count invariant
    pub fn empty(config: ContractConfig) -> Self {
        Self {
            config,
            rules: Vec::new(),
        }
    }

    /// Register an additional rule, evaluated after the existing ones
    pub fn register(&mut self, rule: SharedRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[SharedRule] {
        &self.rules
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Discover the README files under `root`
    pub fn discover(&self, root: &Path) -> Result<Discovery> {
        discovery::discover(root, &self.config.projects_dir)
    }

    /// Scan the tree under `root` and check every README against the contract
    pub fn verify_all(&self, root: &Path) -> Result<RunResult> {
        let span = tracing::info_span!("verify_all", root = %root.display());
        let _guard = span.enter();

        let found = self.discover(root)?;
        let result = self.verify_files(&found.readmes, found.level_count);

        tracing::info!(
            total = result.total_count,
            expected = result.expected_count,
            violations = result.violations.len(),
            passed = result.passed(),
            "Verification complete"
        );
        Ok(result)
    }

    /// Check already-loaded READMEs; `level_count` feeds a per-level count
    pub fn verify_files(&self, readmes: &[ProjectReadme], level_count: usize) -> RunResult {
        let mut violations = Vec::new();
        for readme in readmes {
            let before = violations.len();
            for rule in &self.rules {
                violations.extend(rule.evaluate(readme));
            }
            tracing::debug!(
                path = %readme.relative_path,
                violations = violations.len() - before,
                "Checked project README"
            );
        }

        let expected = self.config.expected_count.resolve(level_count);
        RunResult::new(readmes.len(), expected, violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpectedCount;
    use readme_contract_fixtures::{valid_readme, ProjectTree};
    use crate::model::{RuleKind, Violation};
    use crate::rules::Rule;
    use std::sync::Arc;

    fn small_config(expected: usize) -> ContractConfig {
        ContractConfig::default().with_expected_count(ExpectedCount::Fixed(expected))
    }

    fn doc(path: &str, contents: &str) -> ProjectReadme {
        ProjectReadme::new(path, path, "1", contents)
    }

    #[test]
    fn test_valid_files_pass() {
        let verifier = Verifier::from_config(small_config(2)).unwrap();
        let files = vec![
            doc("a/README.md", &valid_readme(1)),
            doc("b/README.md", &valid_readme(2)),
        ];
        let result = verifier.verify_files(&files, 2);
        assert!(result.passed(), "{:?}", result.violations);
    }

    #[test]
    fn test_failures_are_collected_not_short_circuited() {
        let verifier = Verifier::from_config(small_config(2)).unwrap();
        let broken = valid_readme(1)
            .replace("Home: [README](../../../README.md)", "Home: nowhere")
            .replace("## Mastery check\n", "")
            .replace("Go back to [Level 1 index](../README.md).", "Go back.");
        let files = vec![doc("a/README.md", &broken), doc("b/README.md", &valid_readme(1))];

        let result = verifier.verify_files(&files, 1);
        let kinds: Vec<_> = result.violations.iter().map(|v| v.rule).collect();
        assert_eq!(
            kinds,
            vec![RuleKind::HomeLink, RuleKind::RequiredHeading, RuleKind::NextLink]
        );
        assert_eq!(result.violations_for("b/README.md").count(), 0);
        assert!(result.count_mismatch.is_none());
    }

    #[test]
    fn test_per_level_expected_count() {
        let config =
            ContractConfig::default().with_expected_count(ExpectedCount::PerLevel(2));
        let verifier = Verifier::from_config(config).unwrap();
        let files = vec![doc("a/README.md", &valid_readme(1))];
        let result = verifier.verify_files(&files, 1);
        assert_eq!(result.expected_count, 2);
        assert!(!result.passed());
    }

    struct NoTodoRule;

    impl Rule for NoTodoRule {
        fn id(&self) -> &str {
            "no-todo"
        }
        fn name(&self) -> &str {
            "No TODO"
        }
        fn description(&self) -> String {
            "No TODO markers".to_string()
        }
        fn kind(&self) -> RuleKind {
            RuleKind::RepoRootNote
        }
        fn evaluate(&self, readme: &ProjectReadme) -> Vec<Violation> {
            if readme.text().contains("TODO") {
                vec![Violation::new(self.kind(), &readme.relative_path)]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_registered_rule_runs() {
        let mut verifier = Verifier::empty(small_config(1));
        assert!(verifier.rules().is_empty());
        verifier.register(Arc::new(NoTodoRule));
        let result = verifier.verify_files(&[doc("a/README.md", "TODO")], 1);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn test_verify_all_on_tree() {
        let tree = ProjectTree::new(2, 3).unwrap();
        let verifier = Verifier::from_config(small_config(6)).unwrap();
        let result = verifier.verify_all(tree.root()).unwrap();
        assert!(result.passed(), "{:?}", result.report_lines());
        assert_eq!(result.total_count, 6);
    }
}
