//! CLI-specific error types and exit codes.

use agentinfo_core::SettingsError;
use agentinfo_runtime::ConfigFileError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reporter failed to run.
    #[error("Reporter error: {0}")]
    Reporter(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Reporter(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(err: ConfigFileError) -> Self {
        match err {
            ConfigFileError::Io { .. } => CliError::Io(err.to_string()),
            ConfigFileError::MissingKey { .. } | ConfigFileError::MissingSeparator { .. } => {
                CliError::Config(err.to_string())
            }
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
