//! # Unbumped-Chart Detection
//!
//! A *chart folder* is a directory containing `Chart.yaml`. A staged change
//! under a chart folder requires a staged version bump in that
//! `Chart.yaml`; a folder whose staged diff does not raise the version is
//! *unbumped*.
//!
//! Results are memoized per directory: when many staged files share a
//! chart folder, each folder's diff is inspected once per run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::tree::GitWorkTree;
use crate::version::{extract_staged_versions, ChartVersion};

/// Memoized per-directory unbumped-chart checks against one work tree.
#[derive(Debug)]
pub struct BumpChecker<'a> {
    tree: &'a GitWorkTree,
    memo: HashMap<PathBuf, bool>,
}

impl<'a> BumpChecker<'a> {
    /// A checker with an empty memo.
    pub fn new(tree: &'a GitWorkTree) -> Self {
        Self {
            tree,
            memo: HashMap::new(),
        }
    }

    /// Is `dir` (repo-relative) a chart folder whose staged `Chart.yaml`
    /// diff fails to raise the version?
    ///
    /// Returns `false` for non-chart directories, for charts whose staged
    /// diff raises the version, and whenever git or version parsing fails:
    /// a broken environment must not block commits.
    pub fn is_unbumped_chart_dir(&mut self, dir: &Path) -> bool {
        if let Some(&cached) = self.memo.get(dir) {
            return cached;
        }
        let unbumped = self.compute(dir);
        self.memo.insert(dir.to_path_buf(), unbumped);
        unbumped
    }

    fn compute(&self, dir: &Path) -> bool {
        let chart = dir.join("Chart.yaml");
        if !self.tree.root().join(&chart).is_file() {
            return false;
        }
        let diff = match self.tree.staged_diff(&chart) {
            Ok(diff) => diff,
            Err(e) => {
                tracing::debug!(
                    chart = %chart.display(),
                    error = %e,
                    "staged diff unavailable; treating chart as bumped"
                );
                return false;
            }
        };
        match extract_staged_versions(&diff) {
            (Some(old_raw), Some(new_raw)) => {
                match (
                    old_raw.parse::<ChartVersion>(),
                    new_raw.parse::<ChartVersion>(),
                ) {
                    (Ok(old), Ok(new)) => new <= old,
                    // Unparseable version lines: cannot judge, do not block.
                    _ => false,
                }
            }
            // No staged version change at all.
            _ => true,
        }
    }
}
