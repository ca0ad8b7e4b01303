//! Configuration file (arb-tidy.yaml) data structures
//!
//! Every field is optional. Missing sections and fields fall back to the
//! built-in defaults, which reproduce the layout of a Flutter app with a
//! separate `food` feature module.

pub mod legacy;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, config as config_error};

/// File looked up in the workspace when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "arb-tidy.yaml";

/// Main application bundle shared by `clean` and `clean-legacy`
const APP_BUNDLE: &str = "lib/l10n/app_pt.arb";

/// Root of arb-tidy.yaml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TidyConfig {
    pub clean: CleanConfig,
    pub legacy: LegacyConfig,
    pub validate: ValidateConfig,
}

/// Paths for the key diff cleaner
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    /// Bundle whose keys have moved out of `target`
    pub source: PathBuf,
    /// Bundle that gets rewritten
    pub target: PathBuf,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("lib/features/food/l10n/food_pt.arb"),
            target: PathBuf::from(APP_BUNDLE),
        }
    }
}

/// Target and key list for the legacy key cleaner
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegacyConfig {
    pub target: PathBuf,
    /// Exact key strings to drop; no metadata prefix handling
    pub keys: Vec<String>,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(APP_BUNDLE),
            keys: legacy::default_keys(),
        }
    }
}

/// Bundles checked by `validate` when no paths are given
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    pub files: Vec<PathBuf>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            files: [
                "lib/l10n/app_en.arb",
                "lib/l10n/app_es.arb",
                "lib/l10n/app_pt.arb",
                "lib/l10n/app_pt_PT.arb",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        }
    }
}

impl TidyConfig {
    /// Parse configuration from YAML text. `path` is only used for error reporting.
    pub fn from_yaml(path: &Path, yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config_error::parse_failed(path, &e))
    }

    /// Load configuration for a workspace.
    ///
    /// An explicit path must exist. Without one, `<workspace>/arb-tidy.yaml` is
    /// used when present and built-in defaults otherwise.
    pub fn load(workspace: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => crate::commands::helpers::resolve_path(workspace, path),
            None => {
                let path = workspace.join(CONFIG_FILE_NAME);
                if !path.is_file() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| config_error::read_failed(&path, e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_yaml(&path, &yaml)
    }
}
