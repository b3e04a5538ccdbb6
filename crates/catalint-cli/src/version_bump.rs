//! # version-bump Subcommand
//!
//! Every staged file that lives under a chart folder (a directory holding
//! `Chart.yaml`) requires a staged version bump in that `Chart.yaml`.
//! Optionally restricted to named branches.
//!
//! A git failure at any point skips the check (exit 0): the hook guards
//! chart hygiene, it must not block commits in unusual environments.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use catalint_git::{BumpChecker, GitWorkTree};

/// Arguments for the `catalint version-bump` subcommand.
#[derive(Args, Debug)]
pub struct VersionBumpArgs {
    /// Restrict the check to this branch; repeatable.
    #[arg(short = 'b', long = "branch")]
    pub branch: Vec<String>,
}

/// Execute the version-bump subcommand.
///
/// Returns exit code 1 when any staged file sits in an unbumped chart
/// folder, 0 otherwise (including when git itself is unavailable).
pub fn run_version_bump(args: &VersionBumpArgs, repo_root: &Path) -> Result<u8> {
    let tree = GitWorkTree::new(repo_root);

    // If the hook is restricted to some (other) branches, pass.
    if !args.branch.is_empty() {
        match tree.current_branch() {
            Ok(branch) if !args.branch.contains(&branch) => return Ok(0),
            Err(e) => {
                tracing::debug!(error = %e, "cannot resolve current branch; skipping check");
                return Ok(0);
            }
            Ok(_) => {}
        }
    }

    let staged = match tree.staged_files() {
        Ok(files) => files,
        Err(e) => {
            tracing::debug!(error = %e, "cannot list staged files; skipping check");
            return Ok(0);
        }
    };

    let mut checker = BumpChecker::new(&tree);
    let mut had_offenders = false;
    for file in &staged {
        let in_unbumped_chart = file
            .ancestors()
            .skip(1)
            .any(|dir| checker.is_unbumped_chart_dir(dir));
        if in_unbumped_chart {
            println!(
                "File {} has staged modification but there is no bump in its helm chart version",
                file.display()
            );
            had_offenders = true;
        }
    }

    Ok(if had_offenders { 1 } else { 0 })
}
