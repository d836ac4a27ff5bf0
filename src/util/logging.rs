// logsift - util/logging.rs
//
// Structured logging with runtime-selectable verbosity.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --verbose (sets level to debug)
//
// Output: stderr. The subscriber installed here is the only process-wide
// diagnostic sink; core components emit through the `tracing` facade and
// stay silent when no subscriber is installed (unit tests).

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `verbose` is true when the user passed --verbose on the CLI.
///
/// Priority: RUST_LOG env var > CLI --verbose flag > default "info".
pub fn init(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
