//! Configuration errors

use std::path::Path;

use super::TidyError;

/// Creates a config read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> TidyError {
    TidyError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, err: &serde_yaml::Error) -> TidyError {
    TidyError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
