//! Clean-legacy command: remove a list of legacy keys by exact name

use super::Context;
use super::helpers::{check_strict, resolve_path};
use crate::cli::CleanLegacyArgs;
use crate::error::Result;
use crate::operations;
use crate::ui;

/// Configured key list, extended or replaced by `--key`
fn legacy_keys(configured: &[String], args: &CleanLegacyArgs) -> Vec<String> {
    if args.replace_keys {
        return args.keys.clone();
    }
    configured.iter().chain(&args.keys).cloned().collect()
}

/// Run clean-legacy command
pub fn run(ctx: &Context, args: CleanLegacyArgs) -> Result<()> {
    let target = resolve_path(
        &ctx.workspace,
        args.target.as_deref().unwrap_or(&ctx.config.legacy.target),
    );
    let keys = legacy_keys(&ctx.config.legacy.keys, &args);
    tracing::debug!(count = keys.len(), "legacy key list");

    let outcome = operations::clean_legacy::run(&target, &keys, args.dry_run)?;
    ui::print_clean_outcome(
        &outcome,
        "legacy keys",
        args.dry_run,
        ctx.key_listing(args.dry_run),
    );
    check_strict(&outcome, ctx.strict)
}
