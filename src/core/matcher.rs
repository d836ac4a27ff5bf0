// logsift - core/matcher.rs
//
// Compiles one module's exclusion patterns and answers match-any queries.
//
// Compilation fails the whole module on the first invalid pattern rather
// than skipping it: a misconfigured module must be loud, not silently
// filter less than the operator expects.

use crate::util::error::PatternError;
use regex::Regex;

/// Compiled exclusion patterns for exactly one module.
/// Lives for a single filtering run; never shared across modules.
#[derive(Debug)]
pub struct LineMatcher {
    patterns: Vec<Regex>,
}

impl LineMatcher {
    /// Compile `raw` patterns for `module`.
    ///
    /// Fails with `InvalidPattern` (carrying the offending pattern and its
    /// position) on the first string that is not a valid regex.
    pub fn compile(module: &str, raw: &[String]) -> Result<Self, PatternError> {
        let mut patterns = Vec::with_capacity(raw.len());
        for (index, pattern) in raw.iter().enumerate() {
            let compiled = Regex::new(pattern).map_err(|e| PatternError::InvalidPattern {
                module: module.to_string(),
                index,
                pattern: pattern.clone(),
                source: e,
            })?;
            patterns.push(compiled);
        }

        tracing::info!(
            module,
            patterns = patterns.len(),
            "Exclusion patterns compiled"
        );

        Ok(Self { patterns })
    }

    /// True if any pattern matches anywhere within `line`.
    ///
    /// Unanchored search, short-circuiting on the first hit. Callers pass
    /// the line's content without its terminator so that `$` anchors see
    /// the end of the content (the engine still writes retained lines
    /// verbatim, terminator included).
    pub fn matches_any(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }

    /// Number of compiled patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
