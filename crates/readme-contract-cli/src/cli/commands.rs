//! CLI command definitions for the README contract verifier

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use readme_contract_core::{ContractConfig, ContractError, ExpectedCount, Verifier};

use super::output::{self, ColorChoice, LogFormat, OutputFormat};
use super::ExitCode;

/// README contract verifier
///
/// Checks every `projects/level-*/NN-*/README.md` file against the project
/// README contract and reports each violation on its own line.
#[derive(Parser, Debug)]
#[command(name = "readme-contract")]
#[command(about = "Verify the project README contract across a curriculum tree", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct ContractCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress report output; rely on the exit code
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to colour the verdict line
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Format of the diagnostic log written to stderr
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "README_CONTRACT_LOG_FORMAT",
        global = true
    )]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub verify: VerifyArgs,

    #[command(subcommand)]
    pub command: Option<ContractCommands>,
}

/// Available commands; verification runs when none is given
#[derive(Subcommand, Debug)]
pub enum ContractCommands {
    /// Verify every project README against the contract
    Verify(VerifyArgs),

    /// List the project READMEs the contract applies to
    List {
        #[command(flatten)]
        scan: ScanArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the active contract
    Rules {
        #[command(flatten)]
        scan: ScanArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Where to scan and which contract to load
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Repository root containing the projects directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Contract file (toml, yaml or json); defaults to <root>/.readme-contract.toml
    #[arg(long, env = "README_CONTRACT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory under the root holding the level-* directories
    #[arg(long, env = "README_CONTRACT_PROJECTS_DIR")]
    pub projects_dir: Option<String>,
}

/// Arguments for a verification run
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Require exactly this many project READMEs
    #[arg(long, env = "README_CONTRACT_EXPECTED_COUNT", conflicts_with = "per_level")]
    pub expected_count: Option<usize>,

    /// Require this many project READMEs per discovered level
    #[arg(long, env = "README_CONTRACT_PER_LEVEL")]
    pub per_level: Option<usize>,

    /// Output format for the report
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl VerifyArgs {
    fn expected_count_override(&self) -> Option<ExpectedCount> {
        match (self.expected_count, self.per_level) {
            (Some(n), _) => Some(ExpectedCount::Fixed(n)),
            (None, Some(k)) => Some(ExpectedCount::PerLevel(k)),
            (None, None) => None,
        }
    }
}

/// Resolve the contract: file (explicit or discovered), then flag overrides
fn load_config(scan: &ScanArgs) -> anyhow::Result<ContractConfig> {
    if !scan.root.is_dir() {
        return Err(ContractError::invalid_input(format!(
            "Root directory not found: {}",
            scan.root.display()
        ))
        .into());
    }

    let mut config = match &scan.config {
        Some(path) => ContractConfig::load(path)
            .with_context(|| format!("Failed to load contract '{}'", path.display()))?,
        None => ContractConfig::discover(&scan.root)
            .with_context(|| format!("Failed to load contract from '{}'", scan.root.display()))?,
    };

    if let Some(dir) = &scan.projects_dir {
        config = config.with_projects_dir(dir.clone());
    }
    Ok(config)
}

/// Execute a verification run
pub fn execute_verify(args: VerifyArgs, quiet: bool) -> anyhow::Result<ExitCode> {
    let mut config = load_config(&args.scan)?;
    if let Some(expected) = args.expected_count_override() {
        config = config.with_expected_count(expected);
    }

    let verifier = Verifier::from_config(config)?;
    let result = verifier.verify_all(&args.scan.root)?;

    if !quiet {
        output::render_run(&result, args.format)?;
    }
    Ok(ExitCode::from_verdict(result.passed()))
}

/// Execute the list command
pub fn execute_list(scan: ScanArgs, format: OutputFormat, quiet: bool) -> anyhow::Result<ExitCode> {
    let config = load_config(&scan)?;
    let verifier = Verifier::from_config(config)?;
    let found = verifier.discover(&scan.root)?;

    if !quiet {
        output::render_listing(&found, format)?;
    }
    Ok(ExitCode::Success)
}

/// Execute the rules command
pub fn execute_rules(scan: ScanArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let config = load_config(&scan)?;
    let verifier = Verifier::from_config(config)?;
    output::render_contract(&verifier, format)?;
    Ok(ExitCode::Success)
}
