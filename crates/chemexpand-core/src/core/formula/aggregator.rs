use super::sequence::ExpandedFormula;
use crate::core::periodic::SymbolLookup;

/// Summed atomic numbers for one formula.
///
/// Symbols the lookup does not know contribute zero; each such occurrence is listed in
/// `unknown`, in reading order, so callers can surface them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtonCount {
    pub total: u64,
    pub unknown: Vec<String>,
}

impl ProtonCount {
    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }
}

pub fn count_protons<L>(formula: &ExpandedFormula, lookup: &L) -> ProtonCount
where
    L: SymbolLookup + ?Sized,
{
    tally(formula.iter().map(|atom| atom.as_str()), lookup)
}

/// Counts protons over an already-flat expansion line (whitespace-separated symbols).
pub fn count_protons_in_expanded<L>(line: &str, lookup: &L) -> ProtonCount
where
    L: SymbolLookup + ?Sized,
{
    tally(line.split_ascii_whitespace(), lookup)
}

fn tally<'a, L>(symbols: impl Iterator<Item = &'a str>, lookup: &L) -> ProtonCount
where
    L: SymbolLookup + ?Sized,
{
    let mut count = ProtonCount::default();
    for symbol in symbols {
        match lookup.lookup(symbol) {
            Some(atomic_number) => count.total += u64::from(atomic_number),
            None => count.unknown.push(symbol.to_string()),
        }
    }
    count
}
