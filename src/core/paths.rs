// logsift - core/paths.rs
//
// Input/output path derivation and pattern-code extraction.
// Pure computation over strings and an injected date: no filesystem
// access, no system clock reads. Directory creation belongs to the engine.

use crate::util::constants;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Resolve the input log file path.
///
/// An absolute `explicit` path is returned unchanged. A relative name
/// (or none, which defaults to the module name) resolves under
/// `base_dir/logs/`.
pub fn resolve_input_path(explicit: Option<&str>, module: &str, base_dir: &Path) -> PathBuf {
    let name = explicit.unwrap_or(module);
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    base_dir.join(constants::LOGS_DIR_NAME).join(name)
}

/// Derive the pattern code from the pattern file's base name.
///
/// The default file name (`patterns.json`) yields `"default"`;
/// `patterns_<X>.<ext>` yields `<X>`; anything else yields the base name
/// with its extension stripped. Pure and idempotent.
pub fn derive_pattern_set_id(pattern_file: &Path) -> String {
    let base = pattern_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if base == constants::DEFAULT_PATTERN_FILE_NAME {
        return constants::DEFAULT_PATTERN_CODE.to_string();
    }

    let stem = Path::new(base)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(base);

    match stem.strip_prefix(constants::PATTERN_FILE_PREFIX) {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => stem.to_string(),
    }
}

/// Generate the output file path.
///
/// An absolute `explicit` path is returned unchanged; a relative one is
/// joined under `base_dir`. When absent, the path is derived from the
/// pattern code, module name, and the injected `date`:
/// `base_dir/result/<code>/<module>/<YYYY>/<MM>/<module>_<YYYYMMDD>.log`.
pub fn generate_output_path(
    explicit: Option<&Path>,
    module: &str,
    pattern_code: &str,
    base_dir: &Path,
    date: NaiveDate,
) -> PathBuf {
    if let Some(path) = explicit {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        return base_dir.join(path);
    }

    base_dir
        .join(constants::RESULT_DIR_NAME)
        .join(pattern_code)
        .join(module)
        .join(date.format("%Y").to_string())
        .join(date.format("%m").to_string())
        .join(format!(
            "{module}_{}.{}",
            date.format("%Y%m%d"),
            constants::OUTPUT_FILE_EXT
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_input_defaults_to_module_under_logs() {
        let path = resolve_input_path(None, "svc", Path::new("/base"));
        assert_eq!(path, Path::new("/base/logs/svc"));
    }

    #[test]
    fn test_input_relative_name_under_logs() {
        let path = resolve_input_path(Some("app.log"), "svc", Path::new("/base"));
        assert_eq!(path, Path::new("/base/logs/app.log"));
    }

    #[test]
    fn test_input_absolute_path_unchanged() {
        let path = resolve_input_path(Some("/abs/f.log"), "svc", Path::new("/base"));
        assert_eq!(path, Path::new("/abs/f.log"));
    }

    #[test]
    fn test_pattern_code_default() {
        assert_eq!(derive_pattern_set_id(Path::new("patterns.json")), "default");
        assert_eq!(
            derive_pattern_set_id(Path::new("/etc/sift/patterns.json")),
            "default"
        );
    }

    #[test]
    fn test_pattern_code_prefixed() {
        assert_eq!(derive_pattern_set_id(Path::new("patterns_ABC.json")), "ABC");
    }

    #[test]
    fn test_pattern_code_other_name_strips_extension() {
        assert_eq!(
            derive_pattern_set_id(Path::new("custom_patterns.json")),
            "custom_patterns"
        );
    }

    #[test]
    fn test_pattern_code_idempotent() {
        let file = Path::new("patterns_XY.json");
        assert_eq!(derive_pattern_set_id(file), derive_pattern_set_id(file));
    }

    #[test]
    fn test_pattern_code_empty_suffix_falls_back_to_stem() {
        assert_eq!(derive_pattern_set_id(Path::new("patterns_.json")), "patterns_");
    }

    #[test]
    fn test_output_derived_dated_path() {
        let path = generate_output_path(
            None,
            "svc",
            "default",
            Path::new("/base"),
            date(2026, 8, 29),
        );
        assert_eq!(
            path,
            Path::new("/base/result/default/svc/2026/08/svc_20260829.log")
        );
    }

    #[test]
    fn test_output_month_zero_padded() {
        let path = generate_output_path(None, "svc", "ABC", Path::new("/base"), date(2025, 1, 5));
        assert_eq!(
            path,
            Path::new("/base/result/ABC/svc/2025/01/svc_20250105.log")
        );
    }

    #[test]
    fn test_output_explicit_absolute_unchanged() {
        let path = generate_output_path(
            Some(Path::new("/out/x.log")),
            "svc",
            "default",
            Path::new("/base"),
            date(2026, 8, 29),
        );
        assert_eq!(path, Path::new("/out/x.log"));
    }

    #[test]
    fn test_output_explicit_relative_under_base() {
        let path = generate_output_path(
            Some(Path::new("out/x.log")),
            "svc",
            "default",
            Path::new("/base"),
            date(2026, 8, 29),
        );
        assert_eq!(path, Path::new("/base/out/x.log"));
    }
}
