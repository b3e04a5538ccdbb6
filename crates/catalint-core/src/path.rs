//! # Key Paths — Locating Nodes Within a Document
//!
//! A [`KeyPath`] is the ordered sequence of property and array-slot names
//! from the document root down to one node. Paths are used only for
//! reporting: identity and recursion control never depend on them.
//!
//! Paths are immutable values. Descending into a child produces a *new*
//! path via [`KeyPath::child`]; the parent's path is never touched. This is
//! what lets the walker thread paths through recursion without aliasing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered sequence of string segments locating a node within a JSON
/// document. The empty path denotes the document root.
///
/// Renders as the dot-joined segments, or `[root]` when empty:
///
/// ```
/// use catalint_core::KeyPath;
///
/// let root = KeyPath::root();
/// assert_eq!(root.to_string(), "[root]");
///
/// let nested = root.child("properties").child("foo").child("items");
/// assert_eq!(nested.to_string(), "properties.foo.items");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// The empty path, denoting the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path extended by one segment. `self` is unchanged.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// The path segments, root-first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True for the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the path has no segments (same as [`is_root`](Self::is_root)).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("[root]")
        } else {
            f.write_str(&self.0.join("."))
        }
    }
}
