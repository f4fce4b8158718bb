use super::config::ConfigError;
use crate::core::formula::FormulaError;
use crate::core::periodic::TableLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed formula on line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: FormulaError,
    },

    #[error("Unbalanced parentheses on line {line}")]
    UnbalancedLine { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load periodic table: {0}")]
    Table(#[from] TableLoadError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// The 1-based input line a content error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. } | Self::UnbalancedLine { line } => Some(*line),
            _ => None,
        }
    }

    /// Content errors concern a single line; everything else stops the run.
    pub fn is_recoverable(&self) -> bool {
        self.line().is_some()
    }
}
