//! Error types and handling for arb-tidy
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Resource bundle parse errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for arb-tidy operations
#[derive(Error, Diagnostic, Debug)]
pub enum TidyError {
    // Bundle errors
    #[error("Failed to parse bundle {path}: {reason}")]
    #[diagnostic(
        code(arb_tidy::bundle::malformed),
        help("ARB files must be valid JSON; look for trailing commas or unquoted keys")
    )]
    MalformedBundle { path: String, reason: String },

    #[error("Bundle {path} is not a JSON object")]
    #[diagnostic(
        code(arb_tidy::bundle::not_an_object),
        help("The top level of an ARB file must be one object of translation keys")
    )]
    NotAnObject { path: String },

    #[error("{count} of {total} bundles failed validation")]
    #[diagnostic(code(arb_tidy::bundle::validation_failed))]
    ValidationFailed { count: usize, total: usize },

    // Configuration errors
    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(arb_tidy::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(
        code(arb_tidy::config::parse_failed),
        help("Top-level sections are `clean`, `legacy` and `validate`")
    )]
    ConfigParseFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(arb_tidy::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("{path} not found")]
    #[diagnostic(code(arb_tidy::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(arb_tidy::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(arb_tidy::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(arb_tidy::fs::io_error))]
    IoError { message: String },
}

impl TidyError {
    /// The underlying cause without the path prefix, as shown in validation reports
    pub fn detail(&self) -> String {
        match self {
            TidyError::MalformedBundle { reason, .. }
            | TidyError::FileReadFailed { reason, .. }
            | TidyError::FileWriteFailed { reason, .. }
            | TidyError::ConfigReadFailed { reason, .. }
            | TidyError::ConfigParseFailed { reason, .. } => reason.clone(),
            TidyError::FileNotFound { .. } => "No such file or directory".to_string(),
            TidyError::NotAnObject { .. } => "top-level value is not an object".to_string(),
            TidyError::ValidationFailed { .. } | TidyError::UnknownShell { .. } => {
                self.to_string()
            }
            TidyError::IoError { message } => message.clone(),
        }
    }
}

impl From<std::io::Error> for TidyError {
    fn from(err: std::io::Error) -> Self {
        TidyError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TidyError>;
