use super::{BatchSummary, expand_line, handle_rejection};
use crate::core::io::{FormulaLines, write_expansion, write_placeholder};
use crate::engine::config::RunConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Expands every formula line from `reader` and writes one expansion line per input line.
///
/// Lines with unbalanced brackets or unparsable content become empty placeholder lines
/// under [`MalformedLinePolicy::Skip`](crate::engine::config::MalformedLinePolicy::Skip) and
/// end the run under `Abort`.
#[instrument(skip_all, name = "expand_workflow")]
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &RunConfig,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Expanding formulas",
    });
    reporter.report(Progress::TaskStart {
        total_steps: reporter.total_steps(),
    });
    info!(
        "Expanding formulas (max symbol length {}, on malformed line: {:?}).",
        config.max_symbol_len, config.on_malformed
    );

    let mut summary = BatchSummary::default();
    for item in FormulaLines::new(reader) {
        let line = item?;
        summary.lines_read += 1;

        match expand_line(&line, config) {
            Ok(formula) => {
                debug!("Line {} expanded to {} atoms.", line.number, formula.len());
                write_expansion(writer, &formula)?;
                summary.lines_ok += 1;
            }
            Err(error) => {
                handle_rejection(error, config, &mut summary, reporter)?;
                write_placeholder(writer)?;
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    writer.flush()?;

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    info!(
        "Expanded {} of {} lines ({} rejected).",
        summary.lines_ok,
        summary.lines_read,
        summary.rejected.len()
    );
    Ok(summary)
}
