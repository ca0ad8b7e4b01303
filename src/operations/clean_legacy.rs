//! Remove an explicit list of legacy keys
//!
//! Matching is on the exact key string. `@loadingFood` is only removed when
//! `@loadingFood` itself is listed.

use std::collections::HashSet;
use std::path::Path;

use super::{CleanOutcome, CleanReport, first_missing};
use crate::bundle::ResourceBundle;
use crate::error::Result;

/// Drop every entry of `target` whose exact key is in `legacy_keys`
pub fn remove_legacy_keys(
    target: ResourceBundle,
    legacy_keys: &HashSet<String>,
) -> (ResourceBundle, CleanReport) {
    let before = target.len();
    let (kept, removed) = target.partition(|key| !legacy_keys.contains(key));
    for key in &removed {
        tracing::debug!(key = %key, "removing legacy key");
    }
    let report = CleanReport {
        removed,
        before,
        after: kept.len(),
    };
    (kept, report)
}

/// Remove `legacy_keys` from the bundle at `target_path`
pub fn run(target_path: &Path, legacy_keys: &[String], dry_run: bool) -> Result<CleanOutcome> {
    if let Some(missing) = first_missing(&[target_path]) {
        return Ok(CleanOutcome::MissingFile(missing.to_path_buf()));
    }

    let target = ResourceBundle::load(target_path)?;
    let legacy: HashSet<String> = legacy_keys.iter().cloned().collect();
    let (cleaned, report) = remove_legacy_keys(target, &legacy);

    if !dry_run {
        cleaned.save(target_path)?;
    }
    tracing::info!(
        bundle = %target_path.display(),
        removed = report.removed_count(),
        dry_run,
        "cleaned legacy keys"
    );

    Ok(CleanOutcome::Cleaned(report))
}
