/// Returns `true` when every `(` in `line` is closed by a later `)` and no `)` appears
/// without an open bracket to close.
///
/// Letters, digits and any other bytes are ignored, so the line need not be valid UTF-8.
pub fn is_balanced(line: impl AsRef<[u8]>) -> bool {
    let mut open = 0usize;
    for &byte in line.as_ref() {
        match byte {
            b'(' => open += 1,
            b')' => {
                if open == 0 {
                    return false;
                }
                open -= 1;
            }
            _ => {}
        }
    }
    open == 0
}

/// Bracket-balance outcome over a batch of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    lines_checked: usize,
    invalid_lines: Vec<usize>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result for a 1-based line number.
    pub fn record(&mut self, line_number: usize, balanced: bool) {
        self.lines_checked += 1;
        if !balanced {
            self.invalid_lines.push(line_number);
        }
    }

    pub fn lines_checked(&self) -> usize {
        self.lines_checked
    }

    pub fn invalid_lines(&self) -> &[usize] {
        &self.invalid_lines
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_lines.len()
    }

    pub fn is_all_balanced(&self) -> bool {
        self.invalid_lines.is_empty()
    }
}

pub fn validate_lines<I, S>(lines: I) -> ValidationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ValidationReport::new();
    for (index, line) in lines.into_iter().enumerate() {
        report.record(index + 1, is_balanced(line.as_ref()));
    }
    report
}
