use super::{BatchSummary, decode_line, expand_line, handle_rejection};
use crate::core::formula::{ProtonCount, count_protons, count_protons_in_expanded};
use crate::core::io::{FormulaLines, write_placeholder, write_proton_count};
use crate::core::periodic::SymbolLookup;
use crate::engine::config::{InputKind, RunConfig, UnknownSymbolPolicy};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Writes the total proton count of every input line, one integer per line.
///
/// Input is either condensed formulas or already-expanded symbol lines, per
/// [`RunConfig::input_kind`]. Symbols missing from `lookup` count as zero and are tallied in
/// [`BatchSummary::unknown_symbols`].
#[instrument(skip_all, name = "protons_workflow")]
pub fn run<R, W, L>(
    reader: R,
    writer: &mut W,
    lookup: &L,
    config: &RunConfig,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, EngineError>
where
    R: BufRead,
    W: Write,
    L: SymbolLookup + ?Sized,
{
    reporter.report(Progress::PhaseStart {
        name: "Counting protons",
    });
    reporter.report(Progress::TaskStart {
        total_steps: reporter.total_steps(),
    });
    info!("Counting protons ({:?} input).", config.input_kind);

    let mut summary = BatchSummary::default();
    for item in FormulaLines::new(reader) {
        let line = item?;
        summary.lines_read += 1;

        let counted = match config.input_kind {
            InputKind::Formula => {
                expand_line(&line, config).map(|f| count_protons(&f, lookup))
            }
            InputKind::Expanded => {
                decode_line(&line).map(|text| count_protons_in_expanded(text, lookup))
            }
        };

        match counted {
            Ok(count) => {
                record_unknown(&count, line.number, config, &mut summary);
                write_proton_count(writer, count.total)?;
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
        "Counted {} of {} lines ({} rejected, {} unknown symbol occurrences).",
        summary.lines_ok,
        summary.lines_read,
        summary.rejected.len(),
        summary.unknown_occurrences()
    );
    Ok(summary)
}

fn record_unknown(
    count: &ProtonCount,
    line_number: usize,
    config: &RunConfig,
    summary: &mut BatchSummary,
) {
    for symbol in &count.unknown {
        let seen = summary.unknown_symbols.entry(symbol.clone()).or_insert(0);
        if *seen == 0 {
            match config.unknown_symbols {
                UnknownSymbolPolicy::Warn => warn!(
                    "Unknown element symbol '{}' (first seen on line {}) counted as 0 protons.",
                    symbol, line_number
                ),
                UnknownSymbolPolicy::Zero => debug!(
                    "Unknown element symbol '{}' on line {} counted as 0 protons.",
                    symbol, line_number
                ),
            }
        }
        *seen += 1;
    }
}
