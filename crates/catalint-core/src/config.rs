//! # Lint Configuration
//!
//! Three independent switches consumed verbatim from the command line, plus
//! the nesting-depth guard. The configuration is read-only for the whole
//! walk; nothing derives further state from it.

use serde::{Deserialize, Serialize};

/// Default maximum schema nesting depth before the walk reports an issue
/// and stops descending.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Completeness switches for one lint run.
///
/// Each switch turns one requirement on; all default to off, matching the
/// opt-in flags of the pre-commit hook. `max_depth` bounds recursion on
/// pathological documents: crossing it produces a
/// [`DepthLimitExceeded`](crate::IssueKind::DepthLimitExceeded) issue
/// instead of exhausting the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Require every schema node to carry (or inherit the excuse for) a
    /// `default` value.
    pub require_default: bool,
    /// Require object-typed nodes to declare `properties`,
    /// `patternProperties`, or `additionalProperties`.
    pub require_properties: bool,
    /// Require array-typed nodes to declare `items`.
    pub require_items: bool,
    /// Maximum nesting depth walked before reporting and stopping.
    pub max_depth: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            require_default: false,
            require_properties: false,
            require_items: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
