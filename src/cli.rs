//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// arb-tidy - ARB localization bundle housekeeping
///
/// Remove relocated and legacy translation keys, and validate bundles.
#[derive(Parser, Debug)]
#[command(
    name = "arb-tidy",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Housekeeping for ARB localization bundles",
    long_about = "arb-tidy removes translation keys that moved to a feature module's bundle, \
                  removes a list of legacy keys, and checks that bundles are well-formed JSON.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  arb-tidy clean\n    \
                  arb-tidy clean --source lib/features/pet/l10n/pet_pt.arb --dry-run\n    \
                  arb-tidy clean-legacy --key oldTitle\n    \
                  arb-tidy validate lib/l10n/app_en.arb lib/l10n/app_pt.arb"
)]
pub struct Cli {
    /// Workspace directory relative paths are resolved against (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to <workspace>/arb-tidy.yaml when present)
    #[arg(long, short = 'c', global = true, env = "ARB_TIDY_CONFIG")]
    pub config: Option<PathBuf>,

    /// List removed keys and enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Exit non-zero on missing bundles and failed validation
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove keys that exist in a feature module's bundle
    Clean(CleanArgs),

    /// Remove a list of legacy keys by exact name
    CleanLegacy(CleanLegacyArgs),

    /// Check that bundles are well-formed JSON
    Validate(ValidateArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Clean with configured paths:\n    arb-tidy clean\n\n\
                   Preview which keys would go:\n    arb-tidy clean --dry-run\n\n\
                   Clean another module:\n    arb-tidy clean --source lib/features/pet/l10n/pet_pt.arb")]
pub struct CleanArgs {
    /// Bundle whose keys (and their @metadata) are removed from the target
    #[arg(long, short = 's')]
    pub source: Option<PathBuf>,

    /// Bundle to rewrite
    #[arg(long, short = 't')]
    pub target: Option<PathBuf>,

    /// Report what would be removed without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the clean-legacy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove the configured legacy keys:\n    arb-tidy clean-legacy\n\n\
                  Also remove a metadata entry:\n    arb-tidy clean-legacy --key @loadingFood\n\n\
                  Remove only the given keys:\n    arb-tidy clean-legacy --replace-keys --key a --key b")]
pub struct CleanLegacyArgs {
    /// Bundle to rewrite
    #[arg(long, short = 't')]
    pub target: Option<PathBuf>,

    /// Extra exact key to remove (repeatable)
    #[arg(long = "key", short = 'k', value_name = "KEY")]
    pub keys: Vec<String>,

    /// Use only the --key values instead of extending the configured list
    #[arg(long, requires = "keys")]
    pub replace_keys: bool,

    /// Report what would be removed without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the configured bundles:\n    arb-tidy validate\n\n\
                  Validate specific files:\n    arb-tidy validate lib/l10n/app_en.arb lib/l10n/app_es.arb")]
pub struct ValidateArgs {
    /// Bundles to check (defaults to the configured list)
    pub files: Vec<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    arb-tidy completions --shell bash > ~/.bash_completion.d/arb-tidy\n\n\
                  Generate zsh completions:\n    arb-tidy completions --shell zsh > ~/.zfunc/_arb-tidy")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
