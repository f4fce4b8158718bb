use crate::core::formula::FormulaError;
use std::io::{self, BufRead};

/// One raw input line, terminator removed.
///
/// The bytes are kept undecoded so that a line which is not valid UTF-8 can be rejected on
/// its own instead of ending the read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaLine {
    pub number: usize,
    pub bytes: Vec<u8>,
}

impl FormulaLine {
    /// Decodes the line as UTF-8.
    ///
    /// # Errors
    ///
    /// [`FormulaError::InvalidEncoding`] with the 1-based column of the first bad byte,
    /// counted in characters of the valid prefix.
    pub fn text(&self) -> Result<&str, FormulaError> {
        std::str::from_utf8(&self.bytes).map_err(|e| {
            let valid = &self.bytes[..e.valid_up_to()];
            let column = String::from_utf8_lossy(valid).chars().count() + 1;
            FormulaError::InvalidEncoding { column }
        })
    }
}

/// Iterator over the lines of a reader with 1-based numbering.
///
/// Line terminators (`\n` or `\r\n`) are removed. Only read failures surface as errors.
pub struct FormulaLines<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> FormulaLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for FormulaLines<R> {
    type Item = io::Result<FormulaLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                if bytes.last() == Some(&b'\n') {
                    bytes.pop();
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                }
                self.line_number += 1;
                Some(Ok(FormulaLine {
                    number: self.line_number,
                    bytes,
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Counts the lines `FormulaLines` would yield for the same input.
pub fn count_lines<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut count = 0u64;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(count);
        }
        count += 1;
    }
}
