//! # Chart Versions
//!
//! Chart versions in this domain are dotted numeric components
//! (`1.2.3`, `0.10.0`). [`ChartVersion`] is a validated newtype with
//! component-wise ordering, and [`extract_staged_versions`] pulls the
//! before/after version lines out of a staged unified diff.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// The input could not be parsed as a dotted numeric version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid chart version `{0}`: expected dotted numeric components")]
pub struct ParseVersionError(pub String);

/// A dotted numeric version, ordered component-wise.
///
/// Trailing zero components are not significant: `1.2.0` equals `1.2`.
/// This matches how version comparison tools treat release versions, and
/// is normalized at parse time so `Eq`/`Ord`/`Hash` agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartVersion(Vec<u64>);

impl ChartVersion {
    /// The normalized numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for ChartVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVersionError(s.to_string()));
        }
        let mut components = s
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| ParseVersionError(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        while components.last() == Some(&0) {
            components.pop();
        }
        Ok(Self(components))
    }
}

impl fmt::Display for ChartVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("0");
        }
        let rendered: Vec<String> = self.0.iter().map(u64::to_string).collect();
        f.write_str(&rendered.join("."))
    }
}

fn old_version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^-version:\s*([0-9.]+)\s*$").expect("hard-coded regex"))
}

fn new_version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\+version:\s*([0-9.]+)\s*$").expect("hard-coded regex"))
}

/// Extract the removed and added top-level `version:` lines from a staged
/// unified diff of a `Chart.yaml`.
///
/// Returns the raw captured strings (`old`, `new`); either may be absent
/// when the diff does not touch the version line. Parsing into
/// [`ChartVersion`] is left to the caller, which may want to treat an
/// unparseable capture differently from a missing one.
pub fn extract_staged_versions(diff: &str) -> (Option<&str>, Option<&str>) {
    let old = old_version_re()
        .captures(diff)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    let new = new_version_re()
        .captures(diff)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    (old, new)
}
