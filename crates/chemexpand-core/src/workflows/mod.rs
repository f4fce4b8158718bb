//! # Workflows Module
//!
//! Batch pipelines over a stream of formula lines. Each pipeline reads one line, processes
//! it completely, writes its result, and only then reads the next, so output line `i`
//! always corresponds to input line `i`.
//!
//! - **Validation** ([`validate`]) - Bracket balance per line, no tokenization
//! - **Expansion** ([`expand`]) - Flat, space-separated atom symbols per line
//! - **Proton counting** ([`protons`]) - One summed atomic number per line
//!
//! Content errors in a single line are handled according to
//! [`MalformedLinePolicy`](crate::engine::config::MalformedLinePolicy); I/O failures always
//! end the run.

pub mod expand;
pub mod protons;
pub mod summary;
pub mod validate;

pub use summary::{BatchSummary, LineRejection};

use crate::core::formula::{ExpandedFormula, expand as expand_formula, is_balanced};
use crate::core::io::FormulaLine;
use crate::engine::config::{MalformedLinePolicy, RunConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::warn;

/// Decodes one line as UTF-8, turning a bad encoding into a content error for that line.
fn decode_line(line: &FormulaLine) -> Result<&str, EngineError> {
    line.text().map_err(|source| EngineError::MalformedLine {
        line: line.number,
        source,
    })
}

/// Runs the bracket check, then the expander, on one line.
fn expand_line(line: &FormulaLine, config: &RunConfig) -> Result<ExpandedFormula, EngineError> {
    if !is_balanced(&line.bytes) {
        return Err(EngineError::UnbalancedLine { line: line.number });
    }
    let text = decode_line(line)?;
    expand_formula(text, &config.expand_options()).map_err(|source| {
        EngineError::MalformedLine {
            line: line.number,
            source,
        }
    })
}

/// Applies the malformed-line policy. Returns the error when the run must stop.
fn handle_rejection(
    error: EngineError,
    config: &RunConfig,
    summary: &mut BatchSummary,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    let Some(line) = error.line() else {
        return Err(error);
    };
    if config.on_malformed == MalformedLinePolicy::Abort {
        return Err(error);
    }

    warn!("Skipping line {}: {}", line, error);
    let reason = match &error {
        EngineError::MalformedLine { source, .. } => source.to_string(),
        EngineError::UnbalancedLine { .. } => "Unbalanced parentheses".to_string(),
        other => other.to_string(),
    };
    reporter.report(Progress::Message(format!("Skipped line {}: {}", line, reason)));
    summary.rejected.push(LineRejection { line, reason });
    Ok(())
}
