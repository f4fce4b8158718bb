pub mod expand;
pub mod protons;
pub mod validate;

use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use chemexpand::core::io::count_lines;
use chemexpand::engine::progress::ProgressReporter;
use chemexpand::workflows::BatchSummary;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::FileAccess {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds a reporter for one pass over `input`, sized by a quick line count.
fn reporter_for(input: &Path, progress: &CliProgressHandler) -> Result<ProgressReporter<'static>> {
    let total = count_lines(open_input(input)?).map_err(|source| CliError::FileAccess {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(ProgressReporter::with_callback(progress.get_callback()).with_total_steps(total))
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| CliError::FileAccess {
            path: path.to_path_buf(),
            source,
        })
}

fn print_rejections(summary: &BatchSummary) {
    if summary.rejected.is_empty() {
        return;
    }
    println!(
        "⚠ Skipped {} of {} lines (written as empty lines).",
        summary.rejected.len(),
        summary.lines_read
    );
}
