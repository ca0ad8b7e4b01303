//! ARB resource bundles
//!
//! A resource bundle is a flat JSON object mapping translation keys to values.
//! Keys starting with [`METADATA_MARKER`] hold metadata (description, placeholders)
//! for the content key with the same base name. Entry order is the file order and
//! survives a load/filter/save cycle unchanged.

pub mod serialization;

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, bundle as bundle_error, fs as fs_error};

/// Leading character that marks a metadata key
pub const METADATA_MARKER: char = '@';

/// Strip a single leading metadata marker from `key`.
///
/// `"@"` yields the empty base name; it is not special-cased.
pub fn base_name(key: &str) -> &str {
    key.strip_prefix(METADATA_MARKER).unwrap_or(key)
}

/// An ordered translation bundle loaded from one ARB file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceBundle {
    entries: Map<String, Value>,
}

impl ResourceBundle {
    /// Parse bundle text. `path` is only used for error reporting.
    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| bundle_error::malformed(path, &e))?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(bundle_error::not_an_object(path)),
        }
    }

    /// Read and parse the bundle at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))?;
        let bundle = Self::from_json(path, &text)?;
        tracing::debug!(path = %path.display(), entries = bundle.len(), "loaded bundle");
        Ok(bundle)
    }

    /// Number of entries, content and metadata keys alike
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Keys in file order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Split the bundle into the entries `keep` accepts and the keys it rejects.
    ///
    /// Both halves keep their original relative order.
    pub fn partition(self, mut keep: impl FnMut(&str) -> bool) -> (Self, Vec<String>) {
        let mut kept = Map::new();
        let mut dropped = Vec::new();
        for (key, value) in self.entries {
            if keep(&key) {
                kept.insert(key, value);
            } else {
                dropped.push(key);
            }
        }
        (Self { entries: kept }, dropped)
    }
}

impl FromIterator<(String, Value)> for ResourceBundle {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("title"), "title");
        assert_eq!(base_name("@title"), "title");
        assert_eq!(base_name("@@title"), "@title");
        assert_eq!(base_name("@"), "");
        assert_eq!(base_name(""), "");
    }

    #[test]
    fn test_from_json_preserves_order() {
        let bundle =
            ResourceBundle::from_json(Path::new("t.arb"), r#"{"z": "1", "a": "2", "@z": {}}"#)
                .unwrap();
        let keys: Vec<_> = bundle.keys().collect();
        assert_eq!(keys, vec!["z", "a", "@z"]);
    }

    #[test]
    fn test_from_json_rejects_trailing_comma() {
        let err = ResourceBundle::from_json(Path::new("t.arb"), r#"{"a": "1",}"#).unwrap_err();
        assert!(matches!(err, crate::error::TidyError::MalformedBundle { .. }));
    }

    #[test]
    fn test_from_json_rejects_array() {
        let err = ResourceBundle::from_json(Path::new("t.arb"), r#"["a"]"#).unwrap_err();
        assert!(matches!(err, crate::error::TidyError::NotAnObject { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ResourceBundle::load(&temp.path().join("absent.arb")).unwrap_err();
        assert!(matches!(err, crate::error::TidyError::FileNotFound { .. }));
    }

    #[test]
    fn test_partition_keeps_order() {
        let bundle: ResourceBundle = [
            ("a".to_string(), json!("1")),
            ("b".to_string(), json!("2")),
            ("c".to_string(), json!("3")),
            ("d".to_string(), json!("4")),
        ]
        .into_iter()
        .collect();

        let (kept, dropped) = bundle.partition(|k| k != "b" && k != "d");
        assert_eq!(kept.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(dropped, vec!["b".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_nested_metadata_is_kept_verbatim() {
        let text = r#"{"count": "{n} items", "@count": {"placeholders": {"n": {"type": "int"}}}}"#;
        let bundle = ResourceBundle::from_json(Path::new("t.arb"), text).unwrap();
        let (kept, _) = bundle.partition(|_| true);
        assert_eq!(
            kept.to_arb_string().unwrap(),
            "{\n  \"count\": \"{n} items\",\n  \"@count\": {\n    \"placeholders\": {\n      \"n\": {\n        \"type\": \"int\"\n      }\n    }\n  }\n}"
        );
    }
}
