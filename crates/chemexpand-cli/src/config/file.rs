use crate::error::{CliError, Result};
use chemexpand::engine::config::{MalformedLinePolicy, UnknownSymbolPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileMalformedPolicy {
    Skip,
    Abort,
}

impl From<FileMalformedPolicy> for MalformedLinePolicy {
    fn from(p: FileMalformedPolicy) -> Self {
        match p {
            FileMalformedPolicy::Skip => Self::Skip,
            FileMalformedPolicy::Abort => Self::Abort,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileUnknownSymbolPolicy {
    Zero,
    Warn,
}

impl From<FileUnknownSymbolPolicy> for UnknownSymbolPolicy {
    fn from(p: FileUnknownSymbolPolicy) -> Self {
        match p {
            FileUnknownSymbolPolicy::Zero => Self::Zero,
            FileUnknownSymbolPolicy::Warn => Self::Warn,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileParserConfig {
    #[serde(rename = "max-symbol-length")]
    pub max_symbol_length: Option<usize>,
    #[serde(rename = "max-atoms")]
    pub max_atoms: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePolicyConfig {
    #[serde(rename = "on-malformed")]
    pub on_malformed: Option<FileMalformedPolicy>,
    #[serde(rename = "unknown-symbols")]
    pub unknown_symbols: Option<FileUnknownSymbolPolicy>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "periodic-table")]
    pub periodic_table: Option<PathBuf>,
    pub parser: Option<FileParserConfig>,
    pub policy: Option<FilePolicyConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| CliError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
