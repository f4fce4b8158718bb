//! Symbol → atomic-number lookup.
//!
//! The formula core only ever asks one question of element data: "what is the atomic
//! number of this symbol, if any?". [`SymbolLookup`] captures that question; [`PeriodicTable`]
//! answers it from a loaded file or from the compiled-in [`builtin`] table.

pub mod builtin;
pub mod table;

pub use table::{PeriodicTable, TableLoadError};

/// Case-sensitive, exact-match lookup of an element symbol.
pub trait SymbolLookup {
    fn lookup(&self, symbol: &str) -> Option<u32>;
}

impl<T: SymbolLookup + ?Sized> SymbolLookup for &T {
    fn lookup(&self, symbol: &str) -> Option<u32> {
        (**self).lookup(symbol)
    }
}
