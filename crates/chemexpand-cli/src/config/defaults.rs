use chemexpand::core::formula::{DEFAULT_MAX_ATOMS, MAX_SYMBOL_LEN};
use chemexpand::engine::config::{MalformedLinePolicy, UnknownSymbolPolicy};

pub struct DefaultsConfig {
    pub max_symbol_length: usize,
    pub max_atoms: usize,
    pub on_malformed: MalformedLinePolicy,
    pub unknown_symbols: UnknownSymbolPolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_symbol_length: MAX_SYMBOL_LEN,
            max_atoms: DEFAULT_MAX_ATOMS,
            on_malformed: MalformedLinePolicy::Skip,
            unknown_symbols: UnknownSymbolPolicy::Warn,
        }
    }
}
