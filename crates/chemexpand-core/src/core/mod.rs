//! # Core Module
//!
//! Stateless building blocks shared by every workflow.
//!
//! - **Formula handling** ([`formula`]) - Element symbols, the expander, the bracket validator
//!   and the proton aggregator
//! - **Element data** ([`periodic`]) - The symbol → atomic-number lookup service and its loaders
//! - **Line I/O** ([`io`]) - Numbered line sources and the output line formats
//!
//! Nothing in this module keeps state between formula lines; every call owns the data it
//! works on.

pub mod formula;
pub mod io;
pub mod periodic;
