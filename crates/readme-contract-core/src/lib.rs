//! Project README contract verifier
//!
//! Scans a leveled curriculum tree (`projects/level-*/NN-*/README.md`) and
//! checks every per-project README against a fixed structural contract:
//!
//! - **Home link**: line 2 links back to the top-level README.
//! - **Required headings**: nine fixed level-2 headings are present.
//! - **Repo root note**: the `<repo-root>` instruction sentence is present.
//! - **Next link**: a `Go back to [Level N index](../README.md).` line exists.
//!
//! On top of the per-file rules, the number of discovered files must match an
//! expected total, guarding against lost or duplicated project directories.
//!
//! ## Architecture
//!
//! 1. **Config** (`config`): the contract itself, with defaults and file loading.
//! 2. **Discovery** (`discovery`): deterministic directory scan.
//! 3. **Rules** (`rules`): one pure [`Rule`] per contract clause.
//! 4. **Verifier** (`verifier`): runs all rules, collects every violation.
//! 5. **Model** (`model`): [`RunResult`] and its line-per-violation report.
//!
//! ## Example
//!
//! ```rust,no_run
//! use readme_contract_core::{ContractConfig, Verifier};
//! use std::path::Path;
//!
//! let verifier = Verifier::from_config(ContractConfig::default())?;
//! let result = verifier.verify_all(Path::new("."))?;
//! for line in result.report_lines() {
//!     println!("{}", line);
//! }
//! assert!(result.passed());
//! # Ok::<(), readme_contract_core::ContractError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod model;
pub mod rules;
pub mod verifier;

pub use config::{ContractConfig, ExpectedCount, CONFIG_FILE_NAME};
pub use discovery::{discover, Discovery};
pub use error::{ContractError, Result};
pub use model::{CountMismatch, ProjectReadme, RuleKind, RunResult, Violation};
pub use rules::{Rule, SharedRule};
pub use verifier::Verifier;
