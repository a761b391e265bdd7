//! README contract verifier CLI
//!
//! # Usage
//!
//! ```bash
//! # Verify the tree rooted at the current directory
//! readme-contract
//!
//! # Verify another checkout, machine-readable
//! readme-contract verify ../curriculum --format json
//!
//! # List the READMEs the contract applies to
//! readme-contract list
//!
//! # Show the active contract
//! readme-contract rules
//! ```
//!
//! # Exit Codes
//!
//! - 0: Every README satisfies the contract and the count matches
//! - 1: At least one violation or a count mismatch
//! - 3: Invalid input or arguments
//! - 4: File not found or unreadable
//! - 5: Contract configuration error
//! - 10: Internal error

mod cli;

use clap::Parser;
use cli::output::LogFormat;
use cli::{ContractCli, ExitCode};
use readme_contract_core::ContractError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = ContractCli::parse();

    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, 2) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    };

    // Logs go to stderr; stdout carries the report
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(default_level.into()));
    match cli.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false).with_writer(std::io::stderr))
            .init(),
    }

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}

fn run_cli(cli: ContractCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            let user_error = e
                .downcast_ref::<ContractError>()
                .is_some_and(ContractError::is_user_error);
            if user_error {
                eprintln!("Error: {:#}", e);
            } else {
                // Internal failures keep the full cause chain
                eprintln!("Error: {:?}", e);
            }
            ExitCode::from_error(&e)
        }
    }
}
