// logsift - core/mod.rs
//
// Core filtering logic: pattern loading, matching, path derivation,
// and the line filter engine. The only filesystem I/O in this layer is
// the engine's input/output streaming and the pattern file read.

pub mod engine;
pub mod matcher;
pub mod paths;
pub mod patterns;
