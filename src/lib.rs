// logsift - lib.rs
//
// Library entry point, exposing the core and util modules for integration
// testing and potential future programmatic use.
//
// The CLI surface lives in `main.rs` and is not part of the library.

pub mod core;
pub mod util;
