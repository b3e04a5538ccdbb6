//! # Issue Taxonomy — Findings Produced by the Linter
//!
//! An [`Issue`] pairs a [`KeyPath`] with an [`IssueKind`]. Issues are
//! collected into an ordered sequence per input document; the order follows
//! traversal order (root first, then properties in declaration order, then
//! array items, depth-first).
//!
//! All three finding classes (document-malformed, schema-malformed, and
//! completeness findings) share this one representation. None of them is a
//! Rust error: a document full of findings is a *successful* lint run with a
//! non-empty result.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::KeyPath;

/// The kind of a JSON value.
///
/// A closed tagged union over the six JSON kinds, used instead of runtime
/// shape probing. Consumers match exhaustively; there is no catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any numeric value.
    Number,
    /// A text value.
    String,
    /// A sequence.
    Array,
    /// A mapping.
    Object,
}

impl JsonKind {
    /// Classify a parsed JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns the kind name as it appears in reported messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding category. `Display` yields the exact message reported to the
/// user, so two lint runs over the same document render byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// A position that must hold a schema object holds something else.
    ExpectedObject {
        /// The kind actually found at that position.
        found: JsonKind,
    },

    /// A schema node without a `type` attribute. Nothing below the node is
    /// inspected; the remaining checks assume a known `type`.
    MissingType,

    /// The node's `default` value disagrees with its declared `type`.
    DefaultTypeMismatch {
        /// The declared `type` the default was checked against.
        expected: String,
    },

    /// An object-typed node with neither a `default` nor any properties to
    /// source defaults from.
    MissingDefaultNoProperties,

    /// An object-typed node declaring none of `properties`,
    /// `patternProperties`, or `additionalProperties`.
    MissingProperties,

    /// A non-object node without a `default` attribute.
    MissingDefault,

    /// An array-typed node without an `items` attribute.
    MissingItems,

    /// The walk reached the configured nesting limit and stopped descending.
    DepthLimitExceeded {
        /// The configured limit that was exceeded.
        limit: usize,
    },

    /// The input document is not valid JSON. Always reported at the root
    /// path; nothing else is analyzed for that document.
    ParseError {
        /// The parser's diagnostic.
        reason: String,
    },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedObject { found } => {
                write!(f, "Expected object, got {found}")
            }
            Self::MissingType => f.write_str("Missing 'type' attribute"),
            Self::DefaultTypeMismatch { expected } => {
                write!(f, "Default value has not the expected type (expected {expected})")
            }
            Self::MissingDefaultNoProperties => f.write_str(
                "Missing the 'default' attribute and no properties are specified \
                 to fetch defaults from",
            ),
            Self::MissingProperties => f.write_str(
                "Missing 'properties', 'patternProperties' or 'additionalProperties' \
                 attribute in object",
            ),
            Self::MissingDefault => {
                f.write_str("Missing the 'default' attribute of non-object type")
            }
            Self::MissingItems => f.write_str("Missing 'items' attribute in array"),
            Self::DepthLimitExceeded { limit } => {
                write!(f, "Maximum schema nesting depth ({limit}) exceeded")
            }
            Self::ParseError { reason } => write!(f, "Error parsing JSON: {reason}"),
        }
    }
}

/// A single finding: where, and what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Key path to the node the finding applies to.
    pub path: KeyPath,
    /// What was found there.
    pub kind: IssueKind,
}

impl Issue {
    /// Create a new issue.
    pub fn new(path: KeyPath, kind: IssueKind) -> Self {
        Self { path, kind }
    }

    /// An `Error parsing JSON` issue at the document root.
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self {
            path: KeyPath::root(),
            kind: IssueKind::ParseError {
                reason: reason.into(),
            },
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}
