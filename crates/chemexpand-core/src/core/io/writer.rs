use crate::core::formula::ExpandedFormula;
use std::io::{self, Write};

/// Writes one expansion line: symbols separated by single spaces, then `\n`.
pub fn write_expansion(writer: &mut impl Write, formula: &ExpandedFormula) -> io::Result<()> {
    writeln!(writer, "{formula}")
}

pub fn write_proton_count(writer: &mut impl Write, total: u64) -> io::Result<()> {
    writeln!(writer, "{total}")
}

/// Writes the empty line that stands in for a rejected input line.
pub fn write_placeholder(writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)
}
