// logsift - core/patterns.rs
//
// Pattern configuration loading and per-module lookup.
//
// The pattern file is a JSON document mapping module names to objects with
// an optional "patterns" array of regex strings:
//
//   { "svc": { "patterns": ["^DEBUG:", "^INFO: heartbeat$"] } }
//
// A module entry without a "patterns" field excludes nothing. Pattern
// validity is not checked here; compilation (and its failure mode) belongs
// to the matcher, so a bad pattern in one module does not poison the rest
// of the set until that module is actually selected.

use crate::util::error::PatternError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// One module's raw configuration entry as deserialised from JSON.
/// Unknown keys are ignored for forward compatibility.
#[derive(Debug, Deserialize)]
pub struct ModuleEntry {
    /// Exclusion patterns in configured order. Missing field = empty list.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// A loaded pattern set: module name -> exclusion patterns.
/// Loaded once per run and immutable afterwards.
#[derive(Debug)]
pub struct PatternSet {
    /// Where the set was loaded from, carried for error context only.
    path: PathBuf,
    modules: BTreeMap<String, ModuleEntry>,
}

impl PatternSet {
    /// Load a pattern set from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PatternError::ResourceNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PatternError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse(&content, path)
    }

    /// Parse a pattern set from JSON text.
    ///
    /// `source_path` is used for error messages only (not for I/O).
    pub fn parse(content: &str, source_path: &Path) -> Result<Self, PatternError> {
        let modules: BTreeMap<String, ModuleEntry> =
            serde_json::from_str(content).map_err(|e| PatternError::Malformed {
                path: source_path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(
            path = %source_path.display(),
            modules = modules.len(),
            "Pattern set loaded"
        );

        Ok(Self {
            path: source_path.to_path_buf(),
            modules,
        })
    }

    /// The configured exclusion patterns for `module`, in configured order.
    ///
    /// Fails with `UnknownModule` when `module` is not a key in the set.
    pub fn patterns_for(&self, module: &str) -> Result<&[String], PatternError> {
        self.modules
            .get(module)
            .map(|entry| entry.patterns.as_slice())
            .ok_or_else(|| PatternError::UnknownModule {
                module: module.to_string(),
                path: self.path.clone(),
            })
    }

    /// Names of all configured modules, for diagnostics.
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// The file the set was loaded from.
    pub fn source_path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<PatternSet, PatternError> {
        PatternSet::parse(json, Path::new("test_patterns.json"))
    }

    #[test]
    fn test_patterns_for_returns_configured_order() {
        let set = parse(r#"{"svc": {"patterns": ["b", "a", "c"]}}"#).unwrap();
        assert_eq!(set.patterns_for("svc").unwrap(), ["b", "a", "c"]);
    }

    #[test]
    fn test_unknown_module_carries_name() {
        let set = parse(r#"{"svc": {"patterns": []}}"#).unwrap();
        let err = set.patterns_for("other").unwrap_err();
        match err {
            PatternError::UnknownModule { module, .. } => assert_eq!(module, "other"),
            other => panic!("expected UnknownModule, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_patterns_field_is_empty_list() {
        let set = parse(r#"{"svc": {}}"#).unwrap();
        assert!(set.patterns_for("svc").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_entry_keys_ignored() {
        let set = parse(r#"{"svc": {"patterns": ["x"], "comment": "noise"}}"#).unwrap();
        assert_eq!(set.patterns_for("svc").unwrap(), ["x"]);
    }

    #[test]
    fn test_top_level_array_is_malformed() {
        let err = parse(r#"["not", "a", "mapping"]"#).unwrap_err();
        assert!(matches!(err, PatternError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, PatternError::Malformed { .. }));
    }

    #[test]
    fn test_load_missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = PatternSet::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PatternError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_module_names_lists_all() {
        let set = parse(r#"{"a": {}, "b": {"patterns": ["x"]}}"#).unwrap();
        let mut names = set.module_names();
        names.sort_unstable();
        assert_eq!(names, ["a", "b"]);
    }
}
