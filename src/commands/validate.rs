//! Validate command: check bundles parse as JSON objects

use std::path::PathBuf;

use super::Context;
use super::helpers::resolve_path;
use crate::cli::ValidateArgs;
use crate::error::{Result, TidyError};
use crate::operations::validate::validate_files;
use crate::ui;

/// Run validate command
pub fn run(ctx: &Context, args: ValidateArgs) -> Result<()> {
    let files = if args.files.is_empty() {
        &ctx.config.validate.files
    } else {
        &args.files
    };
    let paths: Vec<PathBuf> = files
        .iter()
        .map(|p| resolve_path(&ctx.workspace, p))
        .collect();

    let report = validate_files(&paths, ui::print_validation_result);
    tracing::info!(
        valid = report.valid_count(),
        invalid = report.invalid_count(),
        "validation finished"
    );

    if ctx.strict && report.invalid_count() > 0 {
        return Err(TidyError::ValidationFailed {
            count: report.invalid_count(),
            total: report.results.len(),
        });
    }
    Ok(())
}
