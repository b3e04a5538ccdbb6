//! # catalint-schema — Schema Analysis
//!
//! Two concerns, deliberately separated:
//!
//! ## Completeness Linting (`lint`)
//!
//! The [`lint`] module walks a parsed JSON Schema document and reports
//! structural deficiencies: missing `type`, missing `default`, missing
//! `properties`/`patternProperties`/`additionalProperties` on objects,
//! missing `items` on arrays, and defaults whose value kind disagrees with
//! the declared `type`. Findings stream out of a lazy iterator in
//! depth-first traversal order. Key entry point:
//!
//! - [`SchemaLinter::lint`] — lazy issue sequence for one document.
//!
//! ## Delegated Compilation (`validate`)
//!
//! The [`validate`] module is a thin wrapper over the `jsonschema` crate:
//! a document "validates" if the crate can compile it as a Draft 2020-12
//! schema. No semantic validation logic lives in this repository, and
//! `$ref` targets are never fetched over the network.
//!
//! ## Crate Policy
//!
//! - Depends only on `catalint-core` internally.
//! - The linter has no I/O and no shared mutable state: input is a parsed
//!   `serde_json::Value`, output is an issue sequence.
//! - Findings never surface as `Err`; errors are reserved for operational
//!   faults in the compilation wrapper.

pub mod lint;
pub mod validate;

pub use lint::{Issues, SchemaLinter};
pub use validate::{SchemaCompileError, SchemaCompiler};
