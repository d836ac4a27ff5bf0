// logsift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: every variant carries the resource
// path, module name, or offending pattern needed for an actionable
// diagnostic, plus the underlying cause where one exists.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logsift operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogSiftError {
    /// Pattern configuration loading, lookup, or compilation failed.
    Pattern(PatternError),

    /// Filtering engine I/O failed.
    Engine(EngineError),
}

impl fmt::Display for LogSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "Pattern error: {e}"),
            Self::Engine(e) => write!(f, "Filter error: {e}"),
        }
    }
}

impl std::error::Error for LogSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            Self::Engine(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Pattern errors
// ---------------------------------------------------------------------------

/// Errors related to the pattern configuration resource and the patterns
/// configured inside it.
#[derive(Debug)]
pub enum PatternError {
    /// The pattern configuration file does not exist.
    ResourceNotFound { path: PathBuf },

    /// The pattern configuration file exists but could not be read.
    Unreadable { path: PathBuf, source: io::Error },

    /// The pattern configuration file is not the expected
    /// module-name -> { "patterns": [...] } mapping.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The requested module is not a key in the loaded pattern set.
    UnknownModule { module: String, path: PathBuf },

    /// A configured pattern string is not a valid regular expression.
    /// `index` is the pattern's zero-based position within its module.
    InvalidPattern {
        module: String,
        index: usize,
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceNotFound { path } => {
                write!(f, "Pattern file '{}' does not exist", path.display())
            }
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read pattern file '{}': {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(
                    f,
                    "Pattern file '{}' is not a valid module-to-patterns mapping: {source}",
                    path.display()
                )
            }
            Self::UnknownModule { module, path } => {
                write!(
                    f,
                    "Module '{module}' not found in pattern file '{}'",
                    path.display()
                )
            }
            Self::InvalidPattern {
                module,
                index,
                pattern,
                source,
            } => write!(
                f,
                "Module '{module}': invalid regex at position {index} ('{pattern}'): {source}"
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PatternError> for LogSiftError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

/// Errors related to the line filter engine's file I/O.
#[derive(Debug)]
pub enum EngineError {
    /// The input log file does not exist.
    InputNotFound { path: PathBuf },

    /// The input log file exists but could not be read
    /// (permissions, invalid UTF-8, ...).
    InputUnreadable { path: PathBuf, source: io::Error },

    /// The output file or its parent directories could not be
    /// created or written.
    OutputUnwritable { path: PathBuf, source: io::Error },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => {
                write!(f, "Input file '{}' does not exist", path.display())
            }
            Self::InputUnreadable { path, source } => {
                write!(f, "Cannot read input file '{}': {source}", path.display())
            }
            Self::OutputUnwritable { path, source } => {
                write!(f, "Cannot write output file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputNotFound { .. } => None,
            Self::InputUnreadable { source, .. } => Some(source),
            Self::OutputUnwritable { source, .. } => Some(source),
        }
    }
}

impl From<EngineError> for LogSiftError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

/// Convenience type alias for logsift results.
pub type Result<T> = std::result::Result<T, LogSiftError>;
