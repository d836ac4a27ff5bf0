// logsift - core/engine.rs
//
// Line filter engine: streams the input file line by line, drops lines the
// matcher excludes, and appends survivors to the output file verbatim.
//
// Output is opened in append mode, never truncated: repeated runs against
// the same dated output path accumulate. If two runs append to the same
// path concurrently, line interleaving is not guaranteed to be atomic;
// that hazard is accepted, not handled.

use crate::core::matcher::LineMatcher;
use crate::util::error::EngineError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Filter `input_path` through `matcher`, appending retained lines to
/// `output_path`. Returns the retained-line count.
///
/// Missing parent directories of the output are created first. Lines are
/// visited in order, exactly once; retained lines are written with their
/// original terminator intact. A mid-stream failure is fatal: lines
/// appended before the failure remain on disk, and both file handles are
/// released on every exit path.
pub fn filter_file(
    input_path: &Path,
    output_path: &Path,
    matcher: &LineMatcher,
) -> Result<u64, EngineError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| EngineError::OutputUnwritable {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let input = File::open(input_path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            EngineError::InputNotFound {
                path: input_path.to_path_buf(),
            }
        } else {
            EngineError::InputUnreadable {
                path: input_path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let mut reader = BufReader::new(input);

    let output = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .map_err(|e| EngineError::OutputUnwritable {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    let mut writer = BufWriter::new(output);

    let mut retained: u64 = 0;
    let mut excluded: u64 = 0;
    let mut line = String::new();

    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .map_err(|e| EngineError::InputUnreadable {
                path: input_path.to_path_buf(),
                source: e,
            })?;
        if bytes == 0 {
            break;
        }

        // Match on the line's content; the terminator is kept out of the
        // matcher's view but written back untouched.
        if matcher.matches_any(trim_terminator(&line)) {
            excluded += 1;
        } else {
            writer
                .write_all(line.as_bytes())
                .map_err(|e| EngineError::OutputUnwritable {
                    path: output_path.to_path_buf(),
                    source: e,
                })?;
            retained += 1;
        }
    }

    writer.flush().map_err(|e| EngineError::OutputUnwritable {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        input = %input_path.display(),
        output = %output_path.display(),
        retained,
        excluded,
        "Filtering complete"
    );

    Ok(retained)
}

/// Strip one trailing line terminator (`\n` or `\r\n`) from `line`.
fn trim_terminator(line: &str) -> &str {
    let content = line.strip_suffix('\n').unwrap_or(line);
    content.strip_suffix('\r').unwrap_or(content)
}
