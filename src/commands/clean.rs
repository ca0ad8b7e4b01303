//! Clean command: remove keys relocated to another bundle

use super::Context;
use super::helpers::{check_strict, resolve_path};
use crate::cli::CleanArgs;
use crate::error::Result;
use crate::operations;
use crate::ui;

/// Run clean command
pub fn run(ctx: &Context, args: CleanArgs) -> Result<()> {
    let source = resolve_path(
        &ctx.workspace,
        args.source.as_deref().unwrap_or(&ctx.config.clean.source),
    );
    let target = resolve_path(
        &ctx.workspace,
        args.target.as_deref().unwrap_or(&ctx.config.clean.target),
    );

    let outcome = operations::clean::run(&source, &target, args.dry_run)?;
    ui::print_clean_outcome(&outcome, "keys", args.dry_run, ctx.key_listing(args.dry_run));
    check_strict(&outcome, ctx.strict)
}
