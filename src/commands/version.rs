//! Version command implementation

use crate::bundle::METADATA_MARKER;
use crate::config::{CONFIG_FILE_NAME, legacy};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("arb-tidy {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  Config file: {CONFIG_FILE_NAME}");
    println!("  Metadata marker: {METADATA_MARKER}");
    println!("  Built-in legacy keys: {}", legacy::default_keys().len());

    Ok(())
}
