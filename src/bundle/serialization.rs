//! Writing bundles back to disk
//!
//! Output is two-space indented JSON with non-ASCII text kept literal and no
//! trailing newline.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::ResourceBundle;
use crate::error::{Result, fs as fs_error};

impl ResourceBundle {
    /// Render the bundle as ARB text
    pub fn to_arb_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| crate::error::TidyError::IoError {
            message: format!("Failed to serialize bundle: {e}"),
        })
    }

    /// Overwrite `path` with this bundle.
    ///
    /// The text is written to a sibling temporary file first and then renamed over
    /// `path`, so readers never observe a partially written bundle.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_arb_string()?;
        write_atomic(path, text.as_bytes())?;
        tracing::debug!(path = %path.display(), entries = self.len(), "wrote bundle");
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| fs_error::write_failed(path, e))?;
    tmp.write_all(contents)
        .map_err(|e| fs_error::write_failed(path, e))?;

    // Keep the original file mode instead of the temp file's 0600
    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| fs_error::write_failed(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| fs_error::write_failed(path, e.error))?;
    Ok(())
}
