//! Check that bundles are well-formed
//!
//! Never modifies a file and never stops early: every path gets an outcome.

use std::path::{Path, PathBuf};

use crate::bundle::ResourceBundle;

/// Result of checking a single bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// Carries the underlying error detail
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Outcomes for every checked path, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub results: Vec<(PathBuf, ValidationOutcome)>,
}

impl ValidationReport {
    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.results.len() - self.valid_count()
    }
}

/// Check one bundle. I/O and parse errors become [`ValidationOutcome::Invalid`].
pub fn validate_file(path: &Path) -> ValidationOutcome {
    match ResourceBundle::load(path) {
        Ok(_) => ValidationOutcome::Valid,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "bundle failed validation");
            ValidationOutcome::Invalid(err.detail())
        }
    }
}

/// Check every path, calling `on_result` as each one completes
pub fn validate_files(
    paths: &[PathBuf],
    mut on_result: impl FnMut(&Path, &ValidationOutcome),
) -> ValidationReport {
    let results = paths
        .iter()
        .map(|path| {
            let outcome = validate_file(path);
            on_result(path, &outcome);
            (path.clone(), outcome)
        })
        .collect();
    ValidationReport { results }
}
