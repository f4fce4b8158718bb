//! # chemexpand Core Library
//!
//! Expansion of condensed chemical-formula notation such as `Co3(Fe(CN)6)2` into a flat,
//! ordered sequence of atomic symbols, together with bracket validation and proton counting.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that each concern can be tested on its own.
//!
//! - **[`core`]: The Foundation.** Stateless primitives: the explicit-stack formula expander,
//!   the bracket validator, the proton aggregator, the periodic-table lookup service and
//!   line-oriented I/O helpers.
//!
//! - **[`engine`]: Run Policy.** Configuration (`RunConfig`), the error type surfaced to callers
//!   (`EngineError`) and the progress-reporting callback plumbing.
//!
//! - **[`workflows`]: The Public API.** Batch pipelines that stream formula lines from a reader,
//!   apply the configured policies line by line, and write results in input order.

pub mod core;
pub mod engine;
pub mod workflows;
