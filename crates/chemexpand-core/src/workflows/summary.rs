use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRejection {
    pub line: usize,
    pub reason: String,
}

/// Outcome of an expansion or proton-counting run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub lines_read: usize,
    pub lines_ok: usize,
    pub rejected: Vec<LineRejection>,
    /// Occurrences of symbols the lookup did not know, across the whole run.
    pub unknown_symbols: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn unknown_occurrences(&self) -> usize {
        self.unknown_symbols.values().sum()
    }
}
