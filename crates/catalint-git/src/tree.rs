//! # Staged-Index View of a Work Tree
//!
//! [`GitWorkTree`] anchors every git invocation to one repository root so
//! callers (and tests) can point the hooks at any directory. All queries
//! are read-only views of the staged index.

use std::path::{Path, PathBuf};

use crate::process::{cmd_output, GitError};

/// Read-only staged-change queries against one git work tree.
#[derive(Debug, Clone)]
pub struct GitWorkTree {
    root: PathBuf,
}

impl GitWorkTree {
    /// A work tree rooted at `root`. The directory is not checked here;
    /// the first git invocation reports a missing or non-repo directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root all queries run against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of all staged files, repo-relative, in git's output order.
    pub fn staged_files(&self) -> Result<Vec<PathBuf>, GitError> {
        let out = cmd_output("git", &["diff", "--staged", "--name-only"], &self.root)?;
        Ok(out
            .lines()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// The currently checked-out branch name.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let out = cmd_output("git", &["rev-parse", "--abbrev-ref", "HEAD"], &self.root)?;
        Ok(out.trim().to_string())
    }

    /// The staged unified diff restricted to one path (repo-relative).
    /// Empty output means the path has no staged changes.
    pub fn staged_diff(&self, path: &Path) -> Result<String, GitError> {
        let spec = path.to_string_lossy();
        cmd_output("git", &["diff", "--staged", "--", spec.as_ref()], &self.root)
    }
}
