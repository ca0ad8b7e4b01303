//! Common test utilities for arb-tidy integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Main app bundle path used by the built-in defaults
pub const APP_PT: &str = "lib/l10n/app_pt.arb";

/// Feature module bundle path used by the built-in defaults
pub const FOOD_PT: &str = "lib/features/food/l10n/food_pt.arb";

/// A temporary Flutter-style project for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read and parse a bundle from workspace, keeping key order
    pub fn read_bundle(&self, path: &str) -> serde_json::Map<String, serde_json::Value> {
        serde_json::from_str(&self.read_file(path)).expect("Bundle is not a JSON object")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// arb-tidy command running in this workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = arb_tidy_cmd();
        cmd.current_dir(&self.path)
            .env_remove("ARB_TIDY_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn arb_tidy_cmd() -> Command {
    Command::cargo_bin("arb-tidy").expect("arb-tidy binary not built")
}

/// Key order of a parsed bundle
pub fn keys(bundle: &serde_json::Map<String, serde_json::Value>) -> Vec<&str> {
    bundle.keys().map(String::as_str).collect()
}
