//! Layered run configuration: built-in defaults, then the TOML file, then `--set`
//! overrides, then command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{CommandOverrides, ConfigSources, build_config};
pub use models::AppConfig;
