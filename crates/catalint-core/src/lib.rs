//! # catalint-core — Foundational Types for catalint
//!
//! Defines the vocabulary shared by every other crate in the workspace:
//! key paths into JSON documents, the completeness-issue taxonomy, and the
//! immutable lint configuration. Every other crate depends on
//! `catalint-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Findings are data, never faults.** A malformed document, a schema
//!    node of the wrong shape, and a missing attribute are all represented
//!    as [`Issue`] values in an ordered sequence. `Result::Err` is reserved
//!    for operational failures (I/O, subprocess) at the driver layer.
//!
//! 2. **Immutable values threaded explicitly.** [`KeyPath`] never mutates in
//!    place; `child()` returns a new path. The check-flag that travels with
//!    it is a plain `bool` parameter. No shared mutable cells anywhere in
//!    the walk.
//!
//! 3. **Exhaustive JSON kind matching.** [`JsonKind`] is a closed enum over
//!    the six JSON value kinds; consumers `match` exhaustively instead of
//!    probing shapes at runtime.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `catalint-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod config;
pub mod issue;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use config::{LintConfig, DEFAULT_MAX_DEPTH};
pub use issue::{Issue, IssueKind, JsonKind};
pub use path::KeyPath;
