//! # Engine Module
//!
//! Run-level policy shared by every workflow: how lines are parsed ([`config`]), what
//! counts as fatal versus recoverable ([`error`]), and how progress is surfaced to a caller
//! ([`progress`]).

pub mod config;
pub mod error;
pub mod progress;
