//! # catalint-cli — Pre-Commit Hook Subcommands
//!
//! Provides the `catalint` command-line interface. Each hook is one
//! subcommand with its own handler module; handlers contain no analysis
//! logic, they wire file access and process output to the domain crates.
//!
//! ## Subcommands
//!
//! - `catalint check-schemas` — schema completeness linting.
//! - `catalint validate-schemas` — delegated JSON Schema compilation.
//! - `catalint version-bump` — staged chart changes require a version bump.
//! - `catalint check-match` — staged filenames must not match a pattern.
//! - `catalint just-fail` — unconditional failure with a message per file.
//!
//! ## Exit Codes
//!
//! Handlers return the process exit code (`0` clean, `1` findings) and
//! reserve `Err` for operational failures; `main` maps both onto
//! `ExitCode`. Hook-visible output goes to stdout, diagnostics to
//! `tracing`.

pub mod check_match;
pub mod check_schemas;
pub mod just_fail;
pub mod validate_schemas;
pub mod version_bump;

use std::path::{Path, PathBuf};

/// Default warning template for the staged-file guards. `{}` receives the
/// offending filename.
pub const DEFAULT_PROTECTED_MESSAGE: &str = "You are trying to push modifications to a \
protected file: {}.\nIf everything else looks fine and you know what you are doing, \
use `--no-verify` to skip all checks.";

/// Resolve a path that may be relative to the repository root.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `repo_root`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}
