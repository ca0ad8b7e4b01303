//! File system errors

use std::path::Path;

use super::TidyError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> TidyError {
    TidyError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error, folding `NotFound` into [`TidyError::FileNotFound`]
pub fn read_failed(path: &Path, err: &std::io::Error) -> TidyError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return not_found(path);
    }
    TidyError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl std::fmt::Display) -> TidyError {
    TidyError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
