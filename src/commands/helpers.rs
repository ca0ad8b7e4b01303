//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{Result, TidyError, fs as fs_error};
use crate::operations::CleanOutcome;

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| TidyError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Join relative paths onto the workspace; absolute paths pass through
pub fn resolve_path(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}

/// In strict mode a missing bundle becomes an error after it has been reported
pub fn check_strict(outcome: &CleanOutcome, strict: bool) -> Result<()> {
    match outcome {
        CleanOutcome::MissingFile(path) if strict => Err(fs_error::not_found(path)),
        _ => Ok(()),
    }
}
