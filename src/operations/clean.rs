//! Remove keys that were relocated to another bundle
//!
//! Every key of the source bundle, with its metadata marker stripped, forms the
//! purge set. A target entry is dropped when its own base name is in that set,
//! so `title` and `@title` always leave together.

use std::collections::HashSet;
use std::path::Path;

use super::{CleanOutcome, CleanReport, first_missing};
use crate::bundle::{ResourceBundle, base_name};
use crate::error::Result;

/// Base names of every key in `source`
pub fn purge_set(source: &ResourceBundle) -> HashSet<String> {
    source.keys().map(|k| base_name(k).to_string()).collect()
}

/// Drop every entry of `target` whose base name is in `purge`
pub fn remove_relocated_keys(
    target: ResourceBundle,
    purge: &HashSet<String>,
) -> (ResourceBundle, CleanReport) {
    let before = target.len();
    let (kept, removed) = target.partition(|key| !purge.contains(base_name(key)));
    for key in &removed {
        tracing::debug!(key = %key, "removing relocated key");
    }
    let report = CleanReport {
        removed,
        before,
        after: kept.len(),
    };
    (kept, report)
}

/// Remove from the bundle at `target_path` every key present in `source_path`.
///
/// Missing files are reported through [`CleanOutcome::MissingFile`] before
/// anything is read; parse errors abort with an error and leave both files as
/// they were.
pub fn run(source_path: &Path, target_path: &Path, dry_run: bool) -> Result<CleanOutcome> {
    if let Some(missing) = first_missing(&[source_path, target_path]) {
        return Ok(CleanOutcome::MissingFile(missing.to_path_buf()));
    }

    let source = ResourceBundle::load(source_path)?;
    let target = ResourceBundle::load(target_path)?;

    let purge = purge_set(&source);
    let (cleaned, report) = remove_relocated_keys(target, &purge);

    if !dry_run {
        cleaned.save(target_path)?;
    }
    tracing::info!(
        bundle = %target_path.display(),
        removed = report.removed_count(),
        dry_run,
        "cleaned relocated keys"
    );

    Ok(CleanOutcome::Cleaned(report))
}
