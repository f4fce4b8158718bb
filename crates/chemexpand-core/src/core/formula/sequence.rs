use super::symbol::ElementSymbol;
use std::fmt;

/// Fully flattened atom occurrences of one formula, in left-to-right reading order.
///
/// `Display` renders the interchange line format: symbols joined by a single space,
/// with no trailing separator and no line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedFormula {
    atoms: Vec<ElementSymbol>,
}

impl ExpandedFormula {
    pub fn new(atoms: Vec<ElementSymbol>) -> Self {
        Self { atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementSymbol> {
        self.atoms.iter()
    }

    pub fn count_of(&self, symbol: &str) -> usize {
        self.atoms.iter().filter(|a| a.as_str() == symbol).count()
    }

    /// Occurrence count per symbol, ordered by first appearance.
    pub fn composition(&self) -> Vec<(ElementSymbol, usize)> {
        let mut counts: Vec<(ElementSymbol, usize)> = Vec::new();
        for atom in &self.atoms {
            match counts.iter_mut().find(|(symbol, _)| symbol == atom) {
                Some((_, count)) => *count += 1,
                None => counts.push((atom.clone(), 1)),
            }
        }
        counts
    }
}

impl fmt::Display for ExpandedFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut atoms = self.atoms.iter();
        if let Some(first) = atoms.next() {
            write!(f, "{first}")?;
            for atom in atoms {
                write!(f, " {atom}")?;
            }
        }
        Ok(())
    }
}

impl FromIterator<ElementSymbol> for ExpandedFormula {
    fn from_iter<I: IntoIterator<Item = ElementSymbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExpandedFormula {
    type Item = &'a ElementSymbol;
    type IntoIter = std::slice::Iter<'a, ElementSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(symbols: &[&str]) -> ExpandedFormula {
        symbols
            .iter()
            .map(|s| ElementSymbol::new(s).unwrap())
            .collect()
    }

    #[test]
    fn display_joins_with_single_spaces() {
        assert_eq!(formula(&["H", "H", "O"]).to_string(), "H H O");
    }

    #[test]
    fn display_of_empty_formula_is_empty() {
        assert_eq!(ExpandedFormula::default().to_string(), "");
    }

    #[test]
    fn composition_keeps_first_appearance_order() {
        let f = formula(&["C", "O", "C", "H", "O", "C"]);
        let composition: Vec<(String, usize)> = f
            .composition()
            .into_iter()
            .map(|(s, n)| (s.to_string(), n))
            .collect();
        assert_eq!(
            composition,
            vec![
                ("C".to_string(), 3),
                ("O".to_string(), 2),
                ("H".to_string(), 1)
            ]
        );
    }

    #[test]
    fn count_of_matches_exact_symbol_only() {
        let f = formula(&["Co", "C", "Co"]);
        assert_eq!(f.count_of("Co"), 2);
        assert_eq!(f.count_of("C"), 1);
        assert_eq!(f.count_of("O"), 0);
    }
}
