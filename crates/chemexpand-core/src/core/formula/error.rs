use super::expander::MAX_MULTIPLIER;
use thiserror::Error;

/// Content-level problem in a single formula line.
///
/// Columns are 1-based character positions within the line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Unexpected character '{ch}' at column {column}")]
    UnexpectedCharacter { ch: char, column: usize },

    #[error("Digit at column {column} does not follow an element symbol or closing bracket")]
    UnexpectedDigit { column: usize },

    #[error("Element symbol '{symbol}' at column {column} is longer than {max} characters")]
    SymbolTooLong {
        symbol: String,
        max: usize,
        column: usize,
    },

    #[error("Multiplier at column {column} exceeds the maximum of {max}", max = MAX_MULTIPLIER)]
    MultiplierOutOfRange { column: usize },

    #[error("Multiplier at column {column} must be at least 1")]
    ZeroMultiplier { column: usize },

    #[error("Closing bracket at column {column} has no matching opening bracket")]
    UnmatchedClose { column: usize },

    #[error("{depth} group(s) still open at end of line")]
    UnclosedGroup { depth: usize },

    #[error("Line is not valid UTF-8 from column {column}")]
    InvalidEncoding { column: usize },

    #[error("Expansion would exceed {limit} atoms (at column {column})")]
    TooManyAtoms { limit: usize, column: usize },
}
