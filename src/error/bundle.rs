//! Resource bundle errors

use std::path::Path;

use super::TidyError;

/// Creates a malformed bundle error from a JSON parse failure
pub fn malformed(path: &Path, err: &serde_json::Error) -> TidyError {
    TidyError::MalformedBundle {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an error for a bundle whose top level is not a JSON object
pub fn not_an_object(path: &Path) -> TidyError {
    TidyError::NotAnObject {
        path: path.display().to_string(),
    }
}
