use crate::core::formula::{ValidationReport, is_balanced};
use crate::core::io::FormulaLines;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::io::BufRead;
use tracing::{info, instrument, warn};

#[instrument(skip_all, name = "validate_workflow")]
pub fn run<R: BufRead>(
    reader: R,
    reporter: &ProgressReporter,
) -> Result<ValidationReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Validating parentheses",
    });
    reporter.report(Progress::TaskStart {
        total_steps: reporter.total_steps(),
    });

    let mut report = ValidationReport::new();
    for item in FormulaLines::new(reader) {
        let line = item?;
        let balanced = is_balanced(&line.bytes);
        if !balanced {
            warn!("Parentheses NOT balanced in line: {}", line.number);
        }
        report.record(line.number, balanced);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    info!(
        "Checked {} lines, {} unbalanced.",
        report.lines_checked(),
        report.invalid_count()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reports_invalid_lines_by_number() {
        let input = "H2O\nA(B\nCo3(Fe(CN)6)2\n)(\n";
        let report = run(Cursor::new(input), &ProgressReporter::new()).unwrap();
        assert_eq!(report.lines_checked(), 4);
        assert_eq!(report.invalid_lines(), &[2, 4]);
    }

    #[test]
    fn clean_file_is_all_balanced() {
        let report = run(Cursor::new("NaCl\n(NH4)2SO4\n"), &ProgressReporter::new()).unwrap();
        assert!(report.is_all_balanced());
    }

    #[test]
    fn validation_does_not_inspect_element_content() {
        let report = run(Cursor::new("12 ?? (x)\n"), &ProgressReporter::new()).unwrap();
        assert!(report.is_all_balanced());
    }

    #[test]
    fn non_utf8_content_does_not_stop_validation() {
        let input: &[u8] = b"(C\xe9)2\nA(\xff\nNaCl\n";
        let report = run(Cursor::new(input), &ProgressReporter::new()).unwrap();
        assert_eq!(report.lines_checked(), 3);
        assert_eq!(report.invalid_lines(), &[2]);
    }
}
