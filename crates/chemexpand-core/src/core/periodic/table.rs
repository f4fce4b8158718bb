use super::SymbolLookup;
use super::builtin::ATOMIC_NUMBERS;
use crate::core::formula::ElementSymbol;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const IN_MEMORY_SOURCE: &str = "<in-memory>";

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Parse error in '{path}' on line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
    #[error("Invalid element symbol '{symbol}' in '{path}'")]
    InvalidSymbol { path: String, symbol: String },
    #[error("Element symbol '{symbol}' is defined more than once in '{path}'")]
    DuplicateSymbol { path: String, symbol: String },
}

#[derive(Debug, Deserialize)]
struct CsvEntry {
    symbol: String,
    atomic_number: u32,
}

/// Read-only symbol → atomic-number table, unique by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodicTable {
    entries: HashMap<String, u32>,
}

impl PeriodicTable {
    /// The 118 named elements.
    pub fn builtin() -> Self {
        let entries = ATOMIC_NUMBERS
            .entries()
            .map(|(symbol, number)| (symbol.to_string(), *number))
            .collect();
        Self { entries }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, TableLoadError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (symbol, number) in pairs {
            table.insert_checked(symbol.as_ref(), number, IN_MEMORY_SOURCE)?;
        }
        Ok(table)
    }

    /// Loads a table from disk, choosing the format by extension.
    ///
    /// - `.csv`: headers `symbol,atomic_number`
    /// - `.toml`: a flat `Symbol = number` map
    /// - anything else: one `symbol atomicNumber` pair per line, `#` comments and blank
    ///   lines ignored
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        debug!("Loading periodic table from {:?}", path);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let table = match extension.as_deref() {
            Some("csv") => Self::load_csv(path)?,
            Some("toml") => Self::load_toml(path)?,
            _ => {
                let content = read_to_string(path)?;
                Self::parse_text(&content, &path.to_string_lossy())?
            }
        };
        debug!("Loaded {} element symbols", table.len());
        Ok(table)
    }

    /// Parses the whitespace-separated `symbol atomicNumber` format.
    pub fn parse_text(content: &str, origin: &str) -> Result<Self, TableLoadError> {
        let mut table = Self::default();
        for (index, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let [symbol, number] = fields.as_slice() else {
                return Err(TableLoadError::Parse {
                    path: origin.to_string(),
                    line: index + 1,
                    message: format!("expected 'symbol atomicNumber', found '{line}'"),
                });
            };
            let number: u32 = number.parse().map_err(|_| TableLoadError::Parse {
                path: origin.to_string(),
                line: index + 1,
                message: format!("invalid atomic number '{number}'"),
            })?;
            table.insert_checked(symbol, number, origin)?;
        }
        Ok(table)
    }

    fn load_csv(path: &Path) -> Result<Self, TableLoadError> {
        let origin = path.to_string_lossy().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| TableLoadError::Csv {
                path: origin.clone(),
                source: e,
            })?;

        let mut table = Self::default();
        for result in reader.deserialize::<CsvEntry>() {
            let record = result.map_err(|e| TableLoadError::Csv {
                path: origin.clone(),
                source: e,
            })?;
            table.insert_checked(&record.symbol, record.atomic_number, &origin)?;
        }
        Ok(table)
    }

    fn load_toml(path: &Path) -> Result<Self, TableLoadError> {
        let origin = path.to_string_lossy().to_string();
        let content = read_to_string(path)?;
        let raw: HashMap<String, u32> =
            toml::from_str(&content).map_err(|e| TableLoadError::Toml {
                path: origin.clone(),
                source: e,
            })?;

        let mut table = Self::default();
        for (symbol, number) in raw {
            table.insert_checked(&symbol, number, &origin)?;
        }
        Ok(table)
    }

    fn insert_checked(
        &mut self,
        symbol: &str,
        atomic_number: u32,
        origin: &str,
    ) -> Result<(), TableLoadError> {
        let symbol = ElementSymbol::new(symbol).map_err(|_| TableLoadError::InvalidSymbol {
            path: origin.to_string(),
            symbol: symbol.to_string(),
        })?;
        if self.entries.contains_key(symbol.as_str()) {
            return Err(TableLoadError::DuplicateSymbol {
                path: origin.to_string(),
                symbol: symbol.to_string(),
            });
        }
        self.entries.insert(symbol.to_string(), atomic_number);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries ordered by atomic number, ties broken by symbol.
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .entries
            .iter()
            .map(|(symbol, number)| (symbol.as_str(), *number))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl SymbolLookup for PeriodicTable {
    fn lookup(&self, symbol: &str) -> Option<u32> {
        self.entries.get(symbol).copied()
    }
}

fn read_to_string(path: &Path) -> Result<String, TableLoadError> {
    std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builtin_table_knows_all_elements() {
        let table = PeriodicTable::builtin();
        assert_eq!(table.len(), 118);
        assert_eq!(table.lookup("Co"), Some(27));
        assert_eq!(table.lookup("Xx"), None);
    }

    #[test]
    fn parse_text_reads_symbol_number_pairs() {
        let content = "# symbol number\nH 1\n\nHe 2\nC    6  # carbon\n";
        let table = PeriodicTable::parse_text(content, "test").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("C"), Some(6));
    }

    #[test]
    fn parse_text_reports_line_of_malformed_entry() {
        let err = PeriodicTable::parse_text("H 1\nHe two\n", "test").unwrap_err();
        assert!(matches!(err, TableLoadError::Parse { line: 2, .. }));

        let err = PeriodicTable::parse_text("H 1 extra\n", "test").unwrap_err();
        assert!(matches!(err, TableLoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let err = PeriodicTable::parse_text("H 1\nH 2\n", "test").unwrap_err();
        assert!(matches!(err, TableLoadError::DuplicateSymbol { symbol, .. } if symbol == "H"));
    }

    #[test]
    fn invalid_symbols_are_rejected() {
        let err = PeriodicTable::from_pairs([("h", 1)]).unwrap_err();
        assert!(matches!(err, TableLoadError::InvalidSymbol { .. }));
    }

    #[test]
    fn entries_are_sorted_by_atomic_number() {
        let table = PeriodicTable::from_pairs([("C", 6), ("H", 1), ("B", 5), ("He", 2)]).unwrap();
        assert_eq!(
            table.entries(),
            vec![("H", 1), ("He", 2), ("B", 5), ("C", 6)]
        );
    }

    #[test]
    fn load_dispatches_on_extension() {
        let dir = tempdir().unwrap();

        let txt = dir.path().join("table.txt");
        fs::write(&txt, "Fr 87\nNp 93\n").unwrap();
        let table = PeriodicTable::load(&txt).unwrap();
        assert_eq!(table.lookup("Fr"), Some(87));

        let csv_path = dir.path().join("table.csv");
        fs::write(&csv_path, "symbol,atomic_number\nO, 8\nFe,26\n").unwrap();
        let table = PeriodicTable::load(&csv_path).unwrap();
        assert_eq!(table.lookup("O"), Some(8));
        assert_eq!(table.lookup("Fe"), Some(26));

        let toml_path = dir.path().join("table.toml");
        fs::write(&toml_path, "N = 7\nNa = 11\n").unwrap();
        let table = PeriodicTable::load(&toml_path).unwrap();
        assert_eq!(table.lookup("Na"), Some(11));
    }

    #[test]
    fn load_of_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = PeriodicTable::load(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, TableLoadError::Io { .. }));
    }

    #[test]
    fn malformed_csv_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "symbol,atomic_number\nO,eight\n").unwrap();
        assert!(matches!(
            PeriodicTable::load(&path),
            Err(TableLoadError::Csv { .. })
        ));
    }
}
