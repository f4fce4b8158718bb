use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{ExpandArgs, ParseOptions, ProtonsArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use chemexpand::engine::config::{
    InputKind, MalformedLinePolicy, RunConfigBuilder, UnknownSymbolPolicy,
};
use chemexpand::engine::error::EngineError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where configuration comes from besides the command's own flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigSources<'a> {
    pub file: Option<&'a Path>,
    pub set_values: &'a [String],
}

/// Values given directly as command flags; these win over every other source.
#[derive(Debug, Default, Clone)]
pub struct CommandOverrides {
    pub max_symbol_length: Option<usize>,
    pub abort_on_error: bool,
    pub warn_unknown: Option<bool>,
    pub periodic_table: Option<PathBuf>,
    pub input_kind: Option<InputKind>,
}

impl From<&ParseOptions> for CommandOverrides {
    fn from(parse: &ParseOptions) -> Self {
        Self {
            max_symbol_length: parse.max_symbol_length,
            abort_on_error: parse.abort_on_error,
            ..Self::default()
        }
    }
}

impl From<&ExpandArgs> for CommandOverrides {
    fn from(args: &ExpandArgs) -> Self {
        Self::from(&args.parse)
    }
}

impl From<&ProtonsArgs> for CommandOverrides {
    fn from(args: &ProtonsArgs) -> Self {
        let warn_unknown = match (
            args.unknown_symbols.warn_unknown,
            args.unknown_symbols.no_warn_unknown,
        ) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        };
        Self {
            warn_unknown,
            periodic_table: args.periodic_table.clone(),
            input_kind: args.from_expanded.then_some(InputKind::Expanded),
            ..Self::from(&args.parse)
        }
    }
}

pub fn build_config(sources: &ConfigSources, overrides: &CommandOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match sources.file {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, sources.set_values)?;
    debug!("Merged file configuration: {:?}", file_config);

    let parser_file = file_config.parser.take().unwrap_or_default();
    let policy_file = file_config.policy.take().unwrap_or_default();

    let max_symbol_length = overrides
        .max_symbol_length
        .or(parser_file.max_symbol_length)
        .unwrap_or(defaults.max_symbol_length);

    let max_atoms = parser_file.max_atoms.unwrap_or(defaults.max_atoms);

    let on_malformed = if overrides.abort_on_error {
        MalformedLinePolicy::Abort
    } else {
        policy_file
            .on_malformed
            .map(Into::into)
            .unwrap_or(defaults.on_malformed)
    };

    let unknown_symbols = match overrides.warn_unknown {
        Some(true) => UnknownSymbolPolicy::Warn,
        Some(false) => UnknownSymbolPolicy::Zero,
        None => policy_file
            .unknown_symbols
            .map(Into::into)
            .unwrap_or(defaults.unknown_symbols),
    };

    let run = RunConfigBuilder::new()
        .max_symbol_len(max_symbol_length)
        .max_atoms(max_atoms)
        .on_malformed(on_malformed)
        .unknown_symbols(unknown_symbols)
        .input_kind(overrides.input_kind.unwrap_or_default())
        .build()
        .map_err(EngineError::from)?;

    let periodic_table = overrides
        .periodic_table
        .clone()
        .or(file_config.periodic_table);

    Ok(AppConfig {
        run,
        periodic_table,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::split_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "periodic-table" => {
                config.periodic_table = Some(PathBuf::from(value));
            }
            "parser.max-symbol-length" => {
                config
                    .parser
                    .get_or_insert_with(Default::default)
                    .max_symbol_length = Some(
                    parser::parse_usize(key, value).map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "parser.max-atoms" => {
                config.parser.get_or_insert_with(Default::default).max_atoms = Some(
                    parser::parse_usize(key, value).map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "policy.on-malformed" => {
                config
                    .policy
                    .get_or_insert_with(Default::default)
                    .on_malformed = Some(
                    parser::parse_malformed_policy(value)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "policy.unknown-symbols" => {
                config
                    .policy
                    .get_or_insert_with(Default::default)
                    .unknown_symbols = Some(
                    parser::parse_unknown_symbol_policy(value)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
