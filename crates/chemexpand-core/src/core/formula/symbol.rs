use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest element symbol the scanner accepts unless configured lower.
pub const MAX_SYMBOL_LEN: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Element symbol is empty")]
    Empty,

    #[error("Element symbol '{0}' must start with an uppercase ASCII letter")]
    InvalidInitial(String),

    #[error("Element symbol '{0}' may only continue with lowercase ASCII letters")]
    InvalidTail(String),

    #[error("Element symbol '{symbol}' is longer than {max} characters")]
    TooLong { symbol: String, max: usize },
}

/// One atom occurrence: an uppercase ASCII letter followed by lowercase ASCII letters.
///
/// No chemical validity is implied; `Xx` is a well-formed symbol even though no such
/// element exists. Lookups decide what a symbol is worth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementSymbol(String);

impl ElementSymbol {
    /// Validates `text` against the default maximum length of [`MAX_SYMBOL_LEN`].
    pub fn new(text: &str) -> Result<Self, SymbolError> {
        Self::with_max_len(text, MAX_SYMBOL_LEN)
    }

    pub fn with_max_len(text: &str, max_len: usize) -> Result<Self, SymbolError> {
        let mut chars = text.chars();
        match chars.next() {
            None => return Err(SymbolError::Empty),
            Some(c) if !c.is_ascii_uppercase() => {
                return Err(SymbolError::InvalidInitial(text.to_string()));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_lowercase()) {
            return Err(SymbolError::InvalidTail(text.to_string()));
        }
        if text.len() > max_len {
            return Err(SymbolError::TooLong {
                symbol: text.to_string(),
                max: max_len,
            });
        }
        Ok(Self(text.to_string()))
    }

    /// Builds a symbol from text the expander has already scanned and bounded.
    pub(crate) fn from_scanned(text: &str) -> Self {
        debug_assert!(Self::with_max_len(text, text.len()).is_ok());
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ElementSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ElementSymbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_to_three_letter_symbols() {
        for text in ["H", "Co", "Uue"] {
            let symbol = ElementSymbol::new(text).unwrap();
            assert_eq!(symbol.as_str(), text);
            assert_eq!(symbol.to_string(), text);
        }
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(ElementSymbol::new(""), Err(SymbolError::Empty));
    }

    #[test]
    fn rejects_lowercase_initial() {
        assert!(matches!(
            ElementSymbol::new("co"),
            Err(SymbolError::InvalidInitial(_))
        ));
    }

    #[test]
    fn rejects_uppercase_or_digit_in_tail() {
        assert!(matches!(
            ElementSymbol::new("CO"),
            Err(SymbolError::InvalidTail(_))
        ));
        assert!(matches!(
            ElementSymbol::new("H2"),
            Err(SymbolError::InvalidTail(_))
        ));
    }

    #[test]
    fn enforces_configured_maximum_length() {
        assert!(ElementSymbol::with_max_len("Fe", 2).is_ok());
        assert_eq!(
            ElementSymbol::with_max_len("Uue", 2),
            Err(SymbolError::TooLong {
                symbol: "Uue".to_string(),
                max: 2
            })
        );
        assert!(matches!(
            ElementSymbol::new("Abcd"),
            Err(SymbolError::TooLong { max: 3, .. })
        ));
    }

    #[test]
    fn parses_via_from_str() {
        let symbol: ElementSymbol = "Na".parse().unwrap();
        assert_eq!(symbol.as_ref(), "Na");
    }
}
