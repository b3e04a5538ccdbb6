//! # check-schemas Subcommand
//!
//! The completeness-linter driver. Reads each input file, lints it, and
//! prints one line per finding:
//!
//! ```text
//! In file <path>, at key <dotted.path|[root]>: <message>
//! ```
//!
//! Files are processed independently; a malformed file reports its own
//! root-level finding and never aborts the remaining files. The exit code
//! is 1 as soon as any file produced at least one finding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use catalint_core::{LintConfig, DEFAULT_MAX_DEPTH};
use catalint_schema::SchemaLinter;

/// Arguments for the `catalint check-schemas` subcommand.
#[derive(Args, Debug)]
pub struct CheckSchemasArgs {
    /// Schema files to lint.
    #[arg(value_name = "FILES")]
    pub filenames: Vec<PathBuf>,

    /// Require defaults to be systematically specified.
    #[arg(long)]
    pub check_default: bool,

    /// Require properties to be systematically specified for objects.
    #[arg(long)]
    pub check_properties: bool,

    /// Require items to be systematically specified for arrays.
    #[arg(long)]
    pub check_items: bool,

    /// Maximum schema nesting depth walked before reporting and stopping.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl CheckSchemasArgs {
    fn lint_config(&self) -> LintConfig {
        LintConfig {
            require_default: self.check_default,
            require_properties: self.check_properties,
            require_items: self.check_items,
            max_depth: self.max_depth,
        }
    }
}

/// Execute the check-schemas subcommand.
///
/// Returns exit code 0 when every file is clean, 1 when any file produced
/// at least one finding. A file that cannot be read is an operational
/// error, not a finding.
pub fn run_check_schemas(args: &CheckSchemasArgs, repo_root: &Path) -> Result<u8> {
    let linter = SchemaLinter::new(args.lint_config());

    let mut all_valid = true;
    for file in &args.filenames {
        let resolved = crate::resolve_path(file, repo_root);
        let text = std::fs::read_to_string(&resolved)
            .with_context(|| format!("cannot read schema file {}", resolved.display()))?;
        for issue in linter.lint_str(&text) {
            println!(
                "In file {}, at key {}: {}",
                file.display(),
                issue.path,
                issue.kind
            );
            all_valid = false;
        }
    }

    Ok(if all_valid { 0 } else { 1 })
}
