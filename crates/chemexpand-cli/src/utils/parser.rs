use crate::config::file::{FileMalformedPolicy, FileUnknownSymbolPolicy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Invalid malformed-line policy '{0}'. Expected 'skip' or 'abort'.")]
    InvalidMalformedPolicy(String),

    #[error("Invalid unknown-symbol policy '{0}'. Expected 'zero' or 'warn'.")]
    InvalidUnknownSymbolPolicy(String),

    #[error("Invalid integer value for {key}: '{value}'")]
    InvalidInteger { key: String, value: String },
}

pub fn split_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(pair.to_string())),
    }
}

pub fn parse_malformed_policy(value: &str) -> Result<FileMalformedPolicy, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "skip" => Ok(FileMalformedPolicy::Skip),
        "abort" => Ok(FileMalformedPolicy::Abort),
        _ => Err(ParseError::InvalidMalformedPolicy(value.to_string())),
    }
}

pub fn parse_unknown_symbol_policy(value: &str) -> Result<FileUnknownSymbolPolicy, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "zero" => Ok(FileUnknownSymbolPolicy::Zero),
        "warn" => Ok(FileUnknownSymbolPolicy::Warn),
        _ => Err(ParseError::InvalidUnknownSymbolPolicy(value.to_string())),
    }
}

pub fn parse_usize(key: &str, value: &str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}
