// logsift - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logsift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Pattern configuration
// =============================================================================

/// Default pattern configuration file name, looked up next to the executable.
/// A pattern file with exactly this base name yields the pattern code
/// "default"; `patterns_<X>.<ext>` yields `<X>`.
pub const DEFAULT_PATTERN_FILE_NAME: &str = "patterns.json";

/// Prefix recognised when deriving a pattern code from a file name.
pub const PATTERN_FILE_PREFIX: &str = "patterns_";

/// Pattern code used for the default pattern file.
pub const DEFAULT_PATTERN_CODE: &str = "default";

// =============================================================================
// Directory layout
// =============================================================================

/// Subdirectory of the base directory searched for relative input files.
pub const LOGS_DIR_NAME: &str = "logs";

/// Subdirectory of the base directory where derived output paths are rooted.
pub const RESULT_DIR_NAME: &str = "result";

/// Extension of derived output files.
pub const OUTPUT_FILE_EXT: &str = "log";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --verbose is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
