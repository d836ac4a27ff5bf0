// logsift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (verbose mode support)
// 3. Path derivation, pattern loading and compilation
// 4. Running the line filter engine and reporting the result

use clap::Parser;
use logsift::core::{engine, matcher::LineMatcher, paths, patterns::PatternSet};
use logsift::util::{self, constants, error::PatternError, error::Result};
use std::path::{Path, PathBuf};

/// logsift - strip known-noisy lines from plain-text log files.
///
/// Lines matching any of the regex patterns configured for --module are
/// dropped; surviving lines are appended to the output file.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about)]
struct Cli {
    /// Module whose exclusion patterns apply (a key in the pattern file).
    #[arg(short, long)]
    module: String,

    /// Input log file: a name under <base>/logs/ or an absolute path
    /// (defaults to the module name).
    #[arg(long = "input-file")]
    input_file: Option<String>,

    /// Output file path, relative to <base> or absolute
    /// (defaults to a dated path under <base>/result/).
    #[arg(long = "output-file")]
    output_file: Option<PathBuf>,

    /// Pattern configuration JSON file
    /// (defaults to patterns.json next to the executable).
    #[arg(long = "pattern-file")]
    pattern_file: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short, long)]
    verbose: bool,
}

/// Directory the executable lives in, mirroring the colocated-config
/// convention: the default pattern file and the logs/ and result/ trees
/// all sit next to the binary. Falls back to the current directory.
fn base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(cli: &Cli, base_dir: &Path) -> Result<(PathBuf, u64)> {
    let pattern_file = cli
        .pattern_file
        .clone()
        .unwrap_or_else(|| base_dir.join(constants::DEFAULT_PATTERN_FILE_NAME));

    let pattern_code = paths::derive_pattern_set_id(&pattern_file);
    let input_path = paths::resolve_input_path(cli.input_file.as_deref(), &cli.module, base_dir);
    let output_path = paths::generate_output_path(
        cli.output_file.as_deref(),
        &cli.module,
        &pattern_code,
        base_dir,
        chrono::Local::now().date_naive(),
    );

    tracing::debug!(
        input = %input_path.display(),
        output = %output_path.display(),
        pattern_file = %pattern_file.display(),
        pattern_code = %pattern_code,
        "Paths resolved"
    );

    // Module lookup and pattern compilation happen before any input or
    // output file is touched: an unknown module performs no log I/O.
    let set = PatternSet::load(&pattern_file)?;
    let raw = match set.patterns_for(&cli.module) {
        Ok(raw) => raw,
        Err(e) => {
            if let PatternError::UnknownModule { .. } = e {
                tracing::error!(
                    module = %cli.module,
                    available = ?set.module_names(),
                    "Module not found in pattern file"
                );
            }
            return Err(e.into());
        }
    };
    let matcher = LineMatcher::compile(&cli.module, raw)?;

    let retained = engine::filter_file(&input_path, &output_path, &matcher)?;
    Ok((output_path, retained))
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.verbose);

    tracing::debug!(
        version = constants::APP_VERSION,
        module = %cli.module,
        "logsift starting"
    );

    match run(&cli, &base_dir()) {
        Ok((output_path, retained)) => {
            tracing::info!(
                output = %output_path.display(),
                retained,
                "Filtered log written"
            );
            println!("{} ({retained} lines retained)", output_path.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "Filtering failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
