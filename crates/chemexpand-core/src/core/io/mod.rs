//! Line-oriented input and output.
//!
//! Formula sources are plain text, one formula per line. Results are written one line per
//! input line so that output line `i` always answers input line `i`.

pub mod lines;
pub mod writer;

pub use lines::{FormulaLine, FormulaLines, count_lines};
pub use writer::{write_expansion, write_placeholder, write_proton_count};
