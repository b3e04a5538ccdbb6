//! # check-match Subcommand
//!
//! Fails when any staged filename matches the given pattern, printing the
//! message template (with `{}` replaced by the filename) per match. The
//! pattern is anchored at the start of the filename.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use regex::Regex;

use catalint_git::GitWorkTree;

/// Arguments for the `catalint check-match` subcommand.
#[derive(Args, Debug)]
pub struct CheckMatchArgs {
    /// Fails if any staged filename matches the given regex.
    #[arg(long)]
    pub regex: String,

    /// Warning message to emit; `{}` receives the filename.
    #[arg(long, default_value = crate::DEFAULT_PROTECTED_MESSAGE)]
    pub message: String,
}

/// Execute the check-match subcommand.
///
/// Returns exit code 0 when no staged filename matches, 1 on any match or
/// when the staged file listing itself fails.
pub fn run_check_match(args: &CheckMatchArgs, repo_root: &Path) -> Result<u8> {
    // Anchor at the start of the filename so the pattern behaves as a
    // prefix match unless it says otherwise.
    let pattern = Regex::new(&format!("^(?:{})", args.regex))
        .with_context(|| format!("invalid --regex pattern: {}", args.regex))?;

    let tree = GitWorkTree::new(repo_root);
    let staged = match tree.staged_files() {
        Ok(files) => files,
        Err(e) => {
            println!("Command failed: `git diff --staged --name-only`");
            tracing::debug!(error = %e, "staged file listing failed");
            return Ok(1);
        }
    };

    let mut all_valid = true;
    for file in &staged {
        let name = file.to_string_lossy();
        if pattern.is_match(&name) {
            println!("{}", args.message.replace("{}", &name));
            all_valid = false;
        }
    }

    Ok(if all_valid { 0 } else { 1 })
}
