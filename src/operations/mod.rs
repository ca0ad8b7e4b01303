//! Bundle housekeeping operations
//!
//! Each operation works on explicit paths and returns a report; printing is
//! left to the command layer.
//!
//! - [`clean`]: drop keys that were relocated to another bundle (metadata aware)
//! - [`clean_legacy`]: drop an exact list of legacy keys
//! - [`validate`]: check bundles parse, without modifying them
//!
//! `clean` and `clean_legacy` are deliberately separate: the first matches on
//! base names and so removes `@key` together with `key`, the second matches
//! exact key strings only.

pub mod clean;
pub mod clean_legacy;
pub mod validate;

use std::path::PathBuf;

/// Result of one filtering pass over a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Removed keys in their original order
    pub removed: Vec<String>,
    /// Entry count before filtering
    pub before: usize,
    /// Entry count after filtering
    pub after: usize,
}

impl CleanReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// What a cleaner run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// A required bundle is missing; nothing was read or written
    MissingFile(PathBuf),
    /// The target was filtered (and written unless this was a dry run)
    Cleaned(CleanReport),
}

/// Return the first path that does not exist, in the given order
fn first_missing<'a>(paths: &[&'a std::path::Path]) -> Option<&'a std::path::Path> {
    paths.iter().copied().find(|p| !p.exists())
}
