//! Command implementations for arb-tidy CLI

pub mod clean;
pub mod clean_legacy;
pub mod completions;
pub mod helpers;
pub mod validate;
pub mod version;

use std::path::PathBuf;

use crate::config::TidyConfig;
use crate::ui::display::KeyListing;

/// Global options shared by the bundle commands
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory relative paths are resolved against
    pub workspace: PathBuf,
    pub config: TidyConfig,
    pub verbose: bool,
    /// Turn missing bundles and failed validation into errors
    pub strict: bool,
}

impl Context {
    fn key_listing(&self, dry_run: bool) -> KeyListing {
        if self.verbose || dry_run {
            KeyListing::Shown
        } else {
            KeyListing::Hidden
        }
    }
}
