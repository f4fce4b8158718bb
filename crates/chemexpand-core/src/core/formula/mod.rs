//! Parsing and evaluation of condensed chemical formulas.
//!
//! A formula line is turned into an [`ExpandedFormula`] by [`expand`], checked for bracket
//! balance by [`is_balanced`], and reduced to a proton count by [`count_protons`].

pub mod aggregator;
pub mod error;
pub mod expander;
pub mod sequence;
pub mod symbol;
pub mod validator;

pub use aggregator::{ProtonCount, count_protons, count_protons_in_expanded};
pub use error::FormulaError;
pub use expander::{DEFAULT_MAX_ATOMS, ExpandOptions, MAX_MULTIPLIER, expand};
pub use sequence::ExpandedFormula;
pub use symbol::{ElementSymbol, MAX_SYMBOL_LEN, SymbolError};
pub use validator::{ValidationReport, is_balanced, validate_lines};
