//! arb-tidy - ARB localization bundle housekeeping
//!
//! Removes translation keys that moved into a feature module's bundle, removes
//! legacy keys by exact name, and validates that bundles are well-formed JSON.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod operations;
mod ui;

use cli::{Cli, Commands};
use commands::Context;
use config::TidyConfig;
use error::Result;

/// Log to stderr so stdout carries only result lines. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "arb_tidy=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Resolve the workspace and load its configuration
fn build_context(
    workspace: Option<PathBuf>,
    config_path: Option<PathBuf>,
    verbose: bool,
    strict: bool,
) -> Result<Context> {
    let workspace = commands::helpers::resolve_workspace_path(workspace)?;
    let config = TidyConfig::load(&workspace, config_path.as_deref())?;
    Ok(Context {
        workspace,
        config,
        verbose,
        strict,
    })
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        workspace,
        config,
        verbose,
        strict,
        command,
    } = cli;

    match command {
        Commands::Clean(args) => {
            let ctx = build_context(workspace, config, verbose, strict)?;
            commands::clean::run(&ctx, args)
        }
        Commands::CleanLegacy(args) => {
            let ctx = build_context(workspace, config, verbose, strict)?;
            commands::clean_legacy::run(&ctx, args)
        }
        Commands::Validate(args) => {
            let ctx = build_context(workspace, config, verbose, strict)?;
            commands::validate::run(&ctx, args)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
