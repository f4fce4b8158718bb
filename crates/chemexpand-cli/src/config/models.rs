use chemexpand::engine::config::RunConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub run: RunConfig,
    /// `None` selects the built-in periodic table.
    pub periodic_table: Option<PathBuf>,
}
