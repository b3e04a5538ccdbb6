//! # catalint-git — Staged-Change Inspection
//!
//! Thin glue over the `git` binary for the hooks that look at the staged
//! index: listing staged files, reading a staged diff, and deciding whether
//! a chart directory's `Chart.yaml` carries a staged version bump.
//!
//! Everything here is simple sequential plumbing around subprocess output;
//! no repository state is modified, ever.
//!
//! ## Failure Philosophy
//!
//! Hooks must not block commits because the environment is odd. A git
//! invocation that fails surfaces as a structured [`GitError`] to the
//! caller, and the bump check degrades to "bumped" (no complaint) when the
//! diff cannot be read. The drivers decide what a failure means for the
//! exit code.

pub mod bump;
pub mod process;
pub mod tree;
pub mod version;

pub use bump::BumpChecker;
pub use process::{cmd_output, GitError};
pub use tree::GitWorkTree;
pub use version::{extract_staged_versions, ChartVersion, ParseVersionError};
