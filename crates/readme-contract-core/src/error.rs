//! Error types for the README contract verifier
//!
//! Contract violations are not errors: they are collected into a
//! [`RunResult`](crate::model::RunResult). The variants here cover the
//! conditions that prevent a verdict from being produced at all.

use std::path::Path;
use thiserror::Error;

/// Main error type for verification operations
#[derive(Error, Debug)]
pub enum ContractError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    Io(String),

    /// Contract configuration could not be parsed or is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// A configured pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Serialization of a report failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ContractError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ContractError::InvalidInput(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        ContractError::Config(msg.into())
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io_at(path: &Path, err: std::io::Error) -> Self {
        ContractError::Io(format!("{}: {}", path.display(), err))
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ContractError::InvalidInput(_)
                | ContractError::Io(_)
                | ContractError::Config(_)
                | ContractError::Pattern(_)
        )
    }
}

impl From<std::io::Error> for ContractError {
    fn from(err: std::io::Error) -> Self {
        ContractError::Io(err.to_string())
    }
}

impl From<regex::Error> for ContractError {
    fn from(err: regex::Error) -> Self {
        ContractError::Pattern(err.to_string())
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        ContractError::Config(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ContractError {
    fn from(err: serde_yaml::Error) -> Self {
        ContractError::Config(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for ContractError {
    fn from(err: toml::de::Error) -> Self {
        ContractError::Config(format!("TOML error: {}", err))
    }
}

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContractError::InvalidInput("no root".to_string());
        assert_eq!(err.to_string(), "Invalid input: no root");
    }

    #[test]
    fn test_is_user_error() {
        assert!(ContractError::invalid_input("x").is_user_error());
        assert!(ContractError::config("x").is_user_error());
        assert!(!ContractError::Serialization("x".to_string()).is_user_error());
    }

    #[test]
    fn test_io_at_includes_path() {
        let err = ContractError::io_at(
            Path::new("projects/level-1"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("projects/level-1"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_regex_error_maps_to_pattern() {
        let err: ContractError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, ContractError::Pattern(_)));
    }
}
