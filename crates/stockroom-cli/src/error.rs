//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use stockroom_core::{CoreError, RepositoryError, StorageError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested product does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::NotFound(msg),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Storage(StorageError::InvalidPath(msg)) => Self::Arguments(msg),
            CoreError::Storage(storage_err) => Self::Io(storage_err.to_string()),
            CoreError::Path(path_err) => Self::Config(path_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error that reached `main`.
///
/// Core and IO errors go through their `CliError` conversion. Errors that
/// don't carry a known type exit with 1.
pub fn exit_code_for(err: anyhow::Error) -> i32 {
    let err = match err.downcast::<CliError>() {
        Ok(cli) => return cli.exit_code(),
        Err(err) => err,
    };
    let err = match err.downcast::<CoreError>() {
        Ok(core) => return CliError::from(core).exit_code(),
        Err(err) => err,
    };
    match err.downcast::<std::io::Error>() {
        Ok(io) => CliError::from(io).exit_code(),
        Err(_) => 1,
    }
}
