use super::error::FormulaError;
use super::sequence::ExpandedFormula;
use super::symbol::{ElementSymbol, MAX_SYMBOL_LEN};

/// Largest multiplier expressible with the one- or two-digit rule.
pub const MAX_MULTIPLIER: u32 = 99;
const MAX_MULTIPLIER_DIGITS: usize = 2;

/// Default cap on the length of one expansion. `((H99)99)99` (970 299 atoms) still fits.
pub const DEFAULT_MAX_ATOMS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    pub max_symbol_len: usize,
    /// Largest number of atoms a single line may expand to.
    pub max_atoms: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            max_symbol_len: MAX_SYMBOL_LEN,
            max_atoms: DEFAULT_MAX_ATOMS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StackEntry {
    Atom(ElementSymbol),
    GroupOpen,
}

/// Expands one formula line into its flat atom sequence.
///
/// The line is scanned once, left to right, against an explicit stack. Element symbols are
/// pushed `multiplier` times; `(` pushes a group marker; `)` pops back to the nearest marker
/// and re-pushes the already-flattened group `multiplier` times. Nested multipliers therefore
/// compound through repeated re-pushing, with no count arithmetic.
///
/// # Errors
///
/// Returns a [`FormulaError`] for any character outside the grammar, for symbols longer than
/// `options.max_symbol_len`, for multipliers of zero or beyond [`MAX_MULTIPLIER`], for
/// brackets that do not pair up, and for lines whose expansion would hold more than
/// `options.max_atoms` atoms. No partial output is produced on error.
pub fn expand(line: &str, options: &ExpandOptions) -> Result<ExpandedFormula, FormulaError> {
    let bytes = line.as_bytes();
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut depth = 0usize;
    let mut cursor = 0usize;
    let mut atom_count = 0usize;

    while cursor < bytes.len() {
        match bytes[cursor] {
            b'A'..=b'Z' => {
                let (symbol, next) = scan_symbol(line, cursor, options.max_symbol_len)?;
                let (multiplier, next) = scan_multiplier(bytes, next)?;
                atom_count = grow(atom_count, 1, multiplier, options.max_atoms, cursor)?;
                for _ in 0..multiplier {
                    stack.push(StackEntry::Atom(symbol.clone()));
                }
                cursor = next;
            }
            b'(' => {
                stack.push(StackEntry::GroupOpen);
                depth += 1;
                cursor += 1;
            }
            b')' => {
                if depth == 0 {
                    return Err(FormulaError::UnmatchedClose {
                        column: cursor + 1,
                    });
                }
                let (multiplier, next) = scan_multiplier(bytes, cursor + 1)?;
                let group = pop_group(&mut stack);
                depth -= 1;
                atom_count -= group.len();
                atom_count = grow(atom_count, group.len(), multiplier, options.max_atoms, cursor)?;
                for _ in 0..multiplier {
                    stack.extend(group.iter().cloned().map(StackEntry::Atom));
                }
                cursor = next;
            }
            b'0'..=b'9' => {
                return Err(FormulaError::UnexpectedDigit {
                    column: cursor + 1,
                });
            }
            _ => {
                let ch = line[cursor..].chars().next().unwrap_or('\u{FFFD}');
                return Err(FormulaError::UnexpectedCharacter {
                    ch,
                    column: cursor + 1,
                });
            }
        }
    }

    if depth > 0 {
        return Err(FormulaError::UnclosedGroup { depth });
    }

    Ok(stack
        .into_iter()
        .filter_map(|entry| match entry {
            StackEntry::Atom(symbol) => Some(symbol),
            StackEntry::GroupOpen => None,
        })
        .collect())
}

fn scan_symbol(
    line: &str,
    start: usize,
    max_len: usize,
) -> Result<(ElementSymbol, usize), FormulaError> {
    let bytes = line.as_bytes();
    let mut end = start + 1;
    while end < bytes.len() && bytes[end].is_ascii_lowercase() {
        end += 1;
    }

    let text = &line[start..end];
    if text.len() > max_len {
        return Err(FormulaError::SymbolTooLong {
            symbol: text.to_string(),
            max: max_len,
            column: start + 1,
        });
    }
    Ok((ElementSymbol::from_scanned(text), end))
}

/// Reads an optional one- or two-digit multiplier starting at `at`; absent means 1.
fn scan_multiplier(bytes: &[u8], at: usize) -> Result<(u32, usize), FormulaError> {
    let digits = bytes[at..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        return Ok((1, at));
    }
    if digits > MAX_MULTIPLIER_DIGITS {
        return Err(FormulaError::MultiplierOutOfRange { column: at + 1 });
    }

    let value = bytes[at..at + digits]
        .iter()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    if value == 0 {
        return Err(FormulaError::ZeroMultiplier { column: at + 1 });
    }
    Ok((value, at + digits))
}

/// Adds `unit * multiplier` atoms to `current`, failing once the total passes `limit`.
fn grow(
    current: usize,
    unit: usize,
    multiplier: u32,
    limit: usize,
    at: usize,
) -> Result<usize, FormulaError> {
    unit.checked_mul(multiplier as usize)
        .and_then(|added| current.checked_add(added))
        .filter(|total| *total <= limit)
        .ok_or(FormulaError::TooManyAtoms {
            limit,
            column: at + 1,
        })
}

/// Pops atoms down to and including the innermost group marker, returning them in
/// reading order. Callers guarantee a marker is present.
fn pop_group(stack: &mut Vec<StackEntry>) -> Vec<ElementSymbol> {
    let mut popped = Vec::new();
    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Atom(symbol) => popped.push(symbol),
            StackEntry::GroupOpen => break,
        }
    }
    popped.reverse();
    popped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_default(line: &str) -> Result<ExpandedFormula, FormulaError> {
        expand(line, &ExpandOptions::default())
    }

    fn symbols(line: &str) -> Vec<String> {
        expand_default(line)
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn expands_water() {
        assert_eq!(expand_default("H2O").unwrap().to_string(), "H H O");
    }

    #[test]
    fn expands_nested_groups_multiplicatively() {
        let f = expand_default("Co3(Fe(CN)6)2").unwrap();
        assert_eq!(f.count_of("Co"), 3);
        assert_eq!(f.count_of("Fe"), 2);
        assert_eq!(f.count_of("C"), 12);
        assert_eq!(f.count_of("N"), 12);
        assert_eq!(f.len(), 29);
    }

    #[test]
    fn preserves_reading_order_inside_repeated_groups() {
        assert_eq!(
            symbols("(A(B)2)3"),
            vec!["A", "B", "B", "A", "B", "B", "A", "B", "B"]
        );
    }

    #[test]
    fn doubly_wrapped_group_multiplies_through() {
        assert_eq!(symbols("((H)2)3"), vec!["H"; 6]);
    }

    #[test]
    fn redundant_group_with_multiplier_one_is_a_no_op() {
        assert_eq!(symbols("Na(Cl)1"), symbols("NaCl"));
        assert_eq!(symbols("Na(Cl)"), symbols("NaCl"));
    }

    #[test]
    fn ungrouped_length_is_sum_of_multipliers() {
        let f = expand_default("C6H12O6Na").unwrap();
        assert_eq!(f.len(), 6 + 12 + 6 + 1);
    }

    #[test]
    fn accepts_two_digit_multipliers_up_to_ninety_nine() {
        assert_eq!(expand_default("C99").unwrap().len(), 99);
        assert_eq!(expand_default("(OH)10").unwrap().len(), 20);
    }

    #[test]
    fn leading_zero_in_two_digit_multiplier_is_accepted() {
        assert_eq!(expand_default("H05").unwrap().len(), 5);
    }

    #[test]
    fn three_letter_symbols_are_scanned_whole() {
        assert_eq!(symbols("Uue2Og"), vec!["Uue", "Uue", "Og"]);
    }

    #[test]
    fn empty_line_expands_to_empty_sequence() {
        assert!(expand_default("").unwrap().is_empty());
    }

    #[test]
    fn empty_group_contributes_nothing() {
        assert_eq!(symbols("H()3O"), vec!["H", "O"]);
    }

    #[test]
    fn missing_close_is_rejected_without_partial_output() {
        assert_eq!(
            expand_default("A(B"),
            Err(FormulaError::UnclosedGroup { depth: 1 })
        );
    }

    #[test]
    fn close_without_open_is_rejected() {
        assert_eq!(
            expand_default("H)2"),
            Err(FormulaError::UnmatchedClose { column: 2 })
        );
    }

    #[test]
    fn stray_leading_digit_is_rejected() {
        assert_eq!(
            expand_default("2H"),
            Err(FormulaError::UnexpectedDigit { column: 1 })
        );
        assert_eq!(
            expand_default("(2H)"),
            Err(FormulaError::UnexpectedDigit { column: 2 })
        );
    }

    #[test]
    fn three_digit_multiplier_is_out_of_range() {
        assert_eq!(
            expand_default("C100"),
            Err(FormulaError::MultiplierOutOfRange { column: 2 })
        );
        assert_eq!(
            expand_default("(H)123"),
            Err(FormulaError::MultiplierOutOfRange { column: 4 })
        );
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        assert_eq!(
            expand_default("H0"),
            Err(FormulaError::ZeroMultiplier { column: 2 })
        );
        assert_eq!(
            expand_default("(H)00"),
            Err(FormulaError::ZeroMultiplier { column: 4 })
        );
    }

    #[test]
    fn lowercase_start_and_other_characters_are_rejected() {
        assert_eq!(
            expand_default("h2o"),
            Err(FormulaError::UnexpectedCharacter { ch: 'h', column: 1 })
        );
        assert_eq!(
            expand_default("H2 O"),
            Err(FormulaError::UnexpectedCharacter { ch: ' ', column: 3 })
        );
        assert_eq!(
            expand_default("H·O"),
            Err(FormulaError::UnexpectedCharacter { ch: '·', column: 2 })
        );
    }

    #[test]
    fn overlong_symbol_is_rejected() {
        assert_eq!(
            expand_default("Abcd"),
            Err(FormulaError::SymbolTooLong {
                symbol: "Abcd".to_string(),
                max: 3,
                column: 1
            })
        );
    }

    #[test]
    fn configured_symbol_limit_is_enforced() {
        let options = ExpandOptions {
            max_symbol_len: 2,
            ..ExpandOptions::default()
        };
        assert!(expand("FeCl3", &options).is_ok());
        assert!(matches!(
            expand("Uue", &options),
            Err(FormulaError::SymbolTooLong { max: 2, .. })
        ));
    }

    #[test]
    fn deep_nesting_within_the_atom_limit_expands() {
        assert_eq!(expand_default("((H99)99)99").unwrap().len(), 970_299);
    }

    #[test]
    fn runaway_nesting_is_rejected_before_allocating() {
        assert_eq!(
            expand_default("(((((H99)99)99)99)99)"),
            Err(FormulaError::TooManyAtoms {
                limit: DEFAULT_MAX_ATOMS,
                column: 18
            })
        );
    }

    #[test]
    fn atom_limit_counts_every_occurrence() {
        let options = ExpandOptions {
            max_atoms: 6,
            ..ExpandOptions::default()
        };
        assert_eq!(expand("(H2O)2", &options).unwrap().len(), 6);
        assert_eq!(
            expand("H2O(H2O)2", &options),
            Err(FormulaError::TooManyAtoms {
                limit: 6,
                column: 8
            })
        );
        assert!(matches!(
            expand("H7", &options),
            Err(FormulaError::TooManyAtoms { column: 1, .. })
        ));
    }
}
