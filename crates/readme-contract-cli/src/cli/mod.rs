//! CLI module for the README contract verifier
//!
//! Argument parsing lives in `commands`, rendering in `output`. This module
//! owns the exit-code scheme and dispatch.

pub mod commands;
pub mod output;

pub use commands::{ContractCli, ContractCommands};

use readme_contract_core::ContractError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every README satisfies the contract
    Success = 0,
    /// Violations found or count mismatch
    ContractViolation = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Contract configuration errors
    ConfigError = 5,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a verification verdict
    pub fn from_verdict(passed: bool) -> Self {
        if passed {
            ExitCode::Success
        } else {
            ExitCode::ContractViolation
        }
    }

    /// Pick the exit code for an error that stopped the run
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ContractError>() {
            Some(ContractError::InvalidInput(_)) => ExitCode::InvalidInput,
            Some(ContractError::Io(_)) => ExitCode::FileError,
            Some(ContractError::Config(_)) | Some(ContractError::Pattern(_)) => {
                ExitCode::ConfigError
            }
            Some(ContractError::Serialization(_)) | None => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: ContractCli) -> anyhow::Result<ExitCode> {
    output::apply_color_choice(cli.color);
    let quiet = cli.quiet;

    match cli.command {
        None => commands::execute_verify(cli.verify, quiet),
        Some(ContractCommands::Verify(args)) => commands::execute_verify(args, quiet),
        Some(ContractCommands::List { scan, format }) => {
            commands::execute_list(scan, format, quiet)
        }
        Some(ContractCommands::Rules { scan, format }) => commands::execute_rules(scan, format),
    }
}
