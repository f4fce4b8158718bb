use crate::core::formula::{DEFAULT_MAX_ATOMS, ExpandOptions, MAX_SYMBOL_LEN};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// What to do with a line whose content cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Record the rejection, write a placeholder line and continue.
    #[default]
    Skip,
    /// Stop the run at the first malformed line.
    Abort,
}

/// How symbols missing from the lookup table are treated during proton counting.
///
/// Both variants count an unknown symbol as zero protons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownSymbolPolicy {
    Zero,
    #[default]
    Warn,
}

/// Shape of the proton-count input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Condensed formulas such as `Ca(OH)2`.
    #[default]
    Formula,
    /// Already-expanded, whitespace-separated symbols such as `Ca O H O H`.
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub max_symbol_len: usize,
    pub max_atoms: usize,
    pub on_malformed: MalformedLinePolicy,
    pub unknown_symbols: UnknownSymbolPolicy,
    pub input_kind: InputKind,
}

impl RunConfig {
    pub fn expand_options(&self) -> ExpandOptions {
        ExpandOptions {
            max_symbol_len: self.max_symbol_len,
            max_atoms: self.max_atoms,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_symbol_len: MAX_SYMBOL_LEN,
            max_atoms: DEFAULT_MAX_ATOMS,
            on_malformed: MalformedLinePolicy::default(),
            unknown_symbols: UnknownSymbolPolicy::default(),
            input_kind: InputKind::default(),
        }
    }
}

#[derive(Default)]
pub struct RunConfigBuilder {
    max_symbol_len: Option<usize>,
    max_atoms: Option<usize>,
    on_malformed: Option<MalformedLinePolicy>,
    unknown_symbols: Option<UnknownSymbolPolicy>,
    input_kind: Option<InputKind>,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_symbol_len(mut self, len: usize) -> Self {
        self.max_symbol_len = Some(len);
        self
    }
    pub fn max_atoms(mut self, limit: usize) -> Self {
        self.max_atoms = Some(limit);
        self
    }
    pub fn on_malformed(mut self, policy: MalformedLinePolicy) -> Self {
        self.on_malformed = Some(policy);
        self
    }
    pub fn unknown_symbols(mut self, policy: UnknownSymbolPolicy) -> Self {
        self.unknown_symbols = Some(policy);
        self
    }
    pub fn input_kind(mut self, kind: InputKind) -> Self {
        self.input_kind = Some(kind);
        self
    }

    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let defaults = RunConfig::default();
        let max_symbol_len = self.max_symbol_len.unwrap_or(defaults.max_symbol_len);
        if !(1..=MAX_SYMBOL_LEN).contains(&max_symbol_len) {
            return Err(ConfigError::InvalidValue {
                field: "max_symbol_len",
                reason: format!("must be between 1 and {MAX_SYMBOL_LEN}, got {max_symbol_len}"),
            });
        }

        let max_atoms = self.max_atoms.unwrap_or(defaults.max_atoms);
        if max_atoms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_atoms",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(RunConfig {
            max_symbol_len,
            max_atoms,
            on_malformed: self.on_malformed.unwrap_or(defaults.on_malformed),
            unknown_symbols: self.unknown_symbols.unwrap_or(defaults.unknown_symbols),
            input_kind: self.input_kind.unwrap_or(defaults.input_kind),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_values_yields_defaults() {
        let config = RunConfigBuilder::new().build().unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.max_symbol_len, 3);
        assert_eq!(config.max_atoms, DEFAULT_MAX_ATOMS);
        assert_eq!(config.on_malformed, MalformedLinePolicy::Skip);
        assert_eq!(config.unknown_symbols, UnknownSymbolPolicy::Warn);
        assert_eq!(config.input_kind, InputKind::Formula);
    }

    #[test]
    fn builder_applies_every_setter() {
        let config = RunConfigBuilder::new()
            .max_symbol_len(2)
            .max_atoms(500)
            .on_malformed(MalformedLinePolicy::Abort)
            .unknown_symbols(UnknownSymbolPolicy::Zero)
            .input_kind(InputKind::Expanded)
            .build()
            .unwrap();
        assert_eq!(config.max_symbol_len, 2);
        assert_eq!(config.on_malformed, MalformedLinePolicy::Abort);
        assert_eq!(config.unknown_symbols, UnknownSymbolPolicy::Zero);
        assert_eq!(config.input_kind, InputKind::Expanded);
        assert_eq!(
            config.expand_options(),
            ExpandOptions {
                max_symbol_len: 2,
                max_atoms: 500
            }
        );
    }

    #[test]
    fn builder_rejects_out_of_range_symbol_length() {
        for len in [0, 4] {
            let err = RunConfigBuilder::new().max_symbol_len(len).build();
            assert!(matches!(
                err,
                Err(ConfigError::InvalidValue {
                    field: "max_symbol_len",
                    ..
                })
            ));
        }
    }

    #[test]
    fn builder_rejects_zero_atom_limit() {
        let err = RunConfigBuilder::new().max_atoms(0).build();
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue {
                field: "max_atoms",
                ..
            })
        ));
    }
}
