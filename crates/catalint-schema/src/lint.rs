//! # Completeness Linter — Schema Node Walker & Issue Evaluator
//!
//! Recursively walks a parsed JSON Schema document and reports structural
//! deficiencies. The walk threads two values: the [`KeyPath`] from the
//! document root, and a boolean check-flag meaning "a default value is still
//! required at or below this point". Both are passed by value into child
//! frames and never aliased.
//!
//! ## Gate precedence per node
//!
//! 1. depth guard: too deep, report and stop
//! 2. shape: not an object, report and stop
//! 3. `$ref`: a reference is not analyzed as a schema, stop silently
//! 4. `type`: absent, report and stop
//! 5. evaluate the node (default-type check, flag narrowing, per-type branch)
//!
//! This ordering is strict: a node missing `type` is never inspected for
//! defaults or properties, since those checks assume a known `type`.
//!
//! ## Check-flag narrowing
//!
//! The flag starts at `LintConfig::require_default` and only ever narrows:
//! it becomes `false` once a node supplies its own `default`, once the
//! vendor override marker (`x-onyxia.overwriteDefaultWith`) is present, or
//! when recursion crosses into an `additionalProperties` schema. It is never
//! widened back to `true`.
//!
//! ## Laziness and ordering
//!
//! [`Issues`] is a pull-based iterator over an explicit work stack: each
//! pull evaluates at most one schema node. Order is deterministic:
//! depth-first, a node's own issues before its children's, object properties
//! in declaration order, then the single `items` child for arrays.

use std::collections::VecDeque;

use serde_json::{Map, Value};

use catalint_core::{Issue, IssueKind, JsonKind, KeyPath, LintConfig};

/// The completeness linter for one configuration.
///
/// Stateless apart from the immutable [`LintConfig`]; one linter can be
/// reused across any number of documents. Each call to [`lint`](Self::lint)
/// builds fresh walk state, so nothing persists between documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaLinter {
    config: LintConfig,
}

impl SchemaLinter {
    /// Create a linter with the given switches.
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// The configuration this linter runs with.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lazily lint a parsed document.
    ///
    /// Returns an iterator that evaluates one schema node per pull; issues
    /// stream out in traversal order without materializing the whole
    /// sequence.
    pub fn lint<'a>(&self, root: &'a Value) -> Issues<'a> {
        Issues {
            config: self.config,
            stack: vec![Frame {
                node: root,
                path: KeyPath::root(),
                check_default: self.config.require_default,
                depth: 0,
            }],
            ready: VecDeque::new(),
        }
    }

    /// Lint a raw document text.
    ///
    /// A JSON parse failure is itself a finding: the result is the single
    /// `Error parsing JSON` issue at the root path and nothing else is
    /// analyzed for that document.
    pub fn lint_str(&self, text: &str) -> Vec<Issue> {
        match serde_json::from_str::<Value>(text) {
            Ok(document) => self.lint(&document).collect(),
            Err(e) => vec![Issue::parse_error(e.to_string())],
        }
    }
}

/// One pending schema node in the walk.
#[derive(Debug)]
struct Frame<'a> {
    node: &'a Value,
    path: KeyPath,
    check_default: bool,
    depth: usize,
}

/// Lazy issue sequence for one document.
///
/// Produced by [`SchemaLinter::lint`]. The iterator owns its entire walk
/// state (work stack plus the issues of the most recently evaluated node);
/// dropping it abandons the rest of the walk without side effects.
#[derive(Debug)]
pub struct Issues<'a> {
    config: LintConfig,
    stack: Vec<Frame<'a>>,
    ready: VecDeque<Issue>,
}

impl Iterator for Issues<'_> {
    type Item = Issue;

    fn next(&mut self) -> Option<Issue> {
        loop {
            if let Some(issue) = self.ready.pop_front() {
                return Some(issue);
            }
            let frame = self.stack.pop()?;
            self.evaluate(frame);
        }
    }
}

impl<'a> Issues<'a> {
    /// Evaluate one node: emit its issues into `ready` and push its
    /// recursion requests onto the stack (reversed, so the first child is
    /// popped first).
    fn evaluate(&mut self, frame: Frame<'a>) {
        let Frame {
            node,
            path,
            check_default,
            depth,
        } = frame;

        if depth > self.config.max_depth {
            self.ready.push_back(Issue::new(
                path,
                IssueKind::DepthLimitExceeded {
                    limit: self.config.max_depth,
                },
            ));
            return;
        }

        let Value::Object(schema) = node else {
            self.ready.push_back(Issue::new(
                path,
                IssueKind::ExpectedObject {
                    found: JsonKind::of(node),
                },
            ));
            return;
        };

        // A node carrying `$ref` delegates to another location; it is a
        // reference, not a schema, and stays opaque to this linter.
        if schema.contains_key("$ref") {
            return;
        }

        let Some(declared) = schema.get("type") else {
            self.ready.push_back(Issue::new(path, IssueKind::MissingType));
            return;
        };
        // A non-string `type` (e.g. a list of types) imposes no constraint
        // here and routes the node through the non-object branch.
        let type_name = declared.as_str();

        // The default-type check reports before any structural issue of the
        // same node, and the node is still walked normally afterwards.
        if let (Some(name), Some(default)) = (type_name, schema.get("default")) {
            if declared_type_matches(name, default) == Some(false) {
                self.ready.push_back(Issue::new(
                    path.clone(),
                    IssueKind::DefaultTypeMismatch {
                        expected: name.to_string(),
                    },
                ));
            }
        }

        let check_default =
            check_default && !schema.contains_key("default") && !has_override_marker(schema);

        let mut children: Vec<Frame<'a>> = Vec::new();

        if type_name == Some("object") {
            match schema.get("properties") {
                Some(properties) if !properties.is_object() => {
                    self.ready.push_back(Issue::new(
                        path.child("properties"),
                        IssueKind::ExpectedObject {
                            found: JsonKind::of(properties),
                        },
                    ));
                }
                Some(Value::Object(properties)) if !properties.is_empty() => {
                    for (key, child) in properties {
                        children.push(Frame {
                            node: child,
                            path: path.child("properties").child(key.as_str()),
                            check_default,
                            depth: depth + 1,
                        });
                    }
                }
                // `properties` absent or present-but-empty.
                _ => {
                    if check_default {
                        self.ready.push_back(Issue::new(
                            path.clone(),
                            IssueKind::MissingDefaultNoProperties,
                        ));
                    }
                    if schema.contains_key("patternProperties") {
                        // Pattern-keyed properties are opaque to this linter.
                    } else if let Some(additional) = schema.get("additionalProperties") {
                        if additional.is_object() {
                            // Defaults are never required through an
                            // open-ended additional-properties schema.
                            children.push(Frame {
                                node: additional,
                                path: path.child("additionalProperties"),
                                check_default: false,
                                depth: depth + 1,
                            });
                        }
                    } else if self.config.require_properties {
                        self.ready
                            .push_back(Issue::new(path.clone(), IssueKind::MissingProperties));
                    }
                }
            }
        } else {
            if check_default {
                self.ready
                    .push_back(Issue::new(path.clone(), IssueKind::MissingDefault));
            }
            if type_name == Some("array") {
                if let Some(items) = schema.get("items") {
                    children.push(Frame {
                        node: items,
                        path: path.child("items"),
                        check_default,
                        depth: depth + 1,
                    });
                } else if self.config.require_items {
                    self.ready
                        .push_back(Issue::new(path.clone(), IssueKind::MissingItems));
                }
            }
        }

        for child in children.into_iter().rev() {
            self.stack.push(child);
        }
    }
}

/// Does `value` match the declared schema `type`, per the standard JSON
/// Schema type vocabulary?
///
/// Returns `None` for type names outside the vocabulary; those impose no
/// constraint and are never flagged. `integer` accepts any number with a
/// zero fractional part, `number` any numeric value.
fn declared_type_matches(type_name: &str, value: &Value) -> Option<bool> {
    let matches = match type_name {
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "integer" => is_whole_number(value),
        "number" => value.is_number(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => return None,
    };
    Some(matches)
}

fn is_whole_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
        }
        _ => false,
    }
}

/// The vendor escape hatch: a nested `x-onyxia.overwriteDefaultWith` key
/// marks the default as supplied out-of-band. It suppresses only the
/// missing-default requirement; the default-type check still runs.
fn has_override_marker(schema: &Map<String, Value>) -> bool {
    schema
        .get("x-onyxia")
        .and_then(|extension| extension.get("overwriteDefaultWith"))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lint_all(config: LintConfig, document: &Value) -> Vec<Issue> {
        SchemaLinter::new(config).lint(document).collect()
    }

    fn require_default() -> LintConfig {
        LintConfig {
            require_default: true,
            ..LintConfig::default()
        }
    }

    #[test]
    fn test_non_object_node_reports_shape_and_stops() {
        let issues = lint_all(LintConfig::default(), &json!([1, 2, 3]));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.is_root());
        assert_eq!(
            issues[0].kind,
            IssueKind::ExpectedObject {
                found: JsonKind::Array
            }
        );
    }

    #[test]
    fn test_ref_node_is_opaque_regardless_of_configuration() {
        let document = json!({"$ref": "#/defs/foo"});
        let config = LintConfig {
            require_default: true,
            require_properties: true,
            require_items: true,
            ..LintConfig::default()
        };
        assert!(lint_all(config, &document).is_empty());
    }

    #[test]
    fn test_ref_wins_over_missing_type() {
        // `$ref` precedes the `type` gate: no missing-type issue either.
        let document = json!({"$ref": "#/defs/foo", "default": 5});
        assert!(lint_all(require_default(), &document).is_empty());
    }

    #[test]
    fn test_missing_type_short_circuits_all_other_checks() {
        let document = json!({"default": 5});
        let issues = lint_all(require_default(), &document);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingType);
    }

    #[test]
    fn test_missing_default_on_scalar_type() {
        let issues = lint_all(require_default(), &json!({"type": "string"}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingDefault);
    }

    #[test]
    fn test_own_default_satisfies_requirement() {
        let issues = lint_all(require_default(), &json!({"type": "string", "default": "x"}));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_default_narrows_flag_for_descendants() {
        let document = json!({
            "type": "object",
            "default": {},
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "integer"}
            }
        });
        assert!(lint_all(require_default(), &document).is_empty());
    }

    #[test]
    fn test_override_marker_suppresses_missing_default() {
        let document = json!({
            "type": "string",
            "x-onyxia": {"overwriteDefaultWith": "region.defaultIpProtection"}
        });
        assert!(lint_all(require_default(), &document).is_empty());
    }

    #[test]
    fn test_override_marker_does_not_suppress_type_mismatch() {
        let document = json!({
            "type": "string",
            "default": 5,
            "x-onyxia": {"overwriteDefaultWith": "region.defaultIpProtection"}
        });
        let issues = lint_all(require_default(), &document);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].kind,
            IssueKind::DefaultTypeMismatch {
                expected: "string".to_string()
            }
        );
    }

    #[test]
    fn test_override_marker_requires_the_nested_key() {
        // A bare `x-onyxia` extension without `overwriteDefaultWith` is not
        // an override.
        let document = json!({
            "type": "string",
            "x-onyxia": {"hidden": true}
        });
        let issues = lint_all(require_default(), &document);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingDefault);
    }

    #[test]
    fn test_mismatched_default_still_walks_children() {
        let document = json!({
            "type": "object",
            "default": "not-an-object",
            "properties": {
                "x": {"default": true}
            }
        });
        let issues = lint_all(require_default(), &document);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].kind,
            IssueKind::DefaultTypeMismatch {
                expected: "object".to_string()
            }
        );
        // The child is still visited (and is missing its own `type`).
        assert_eq!(issues[1].path.to_string(), "properties.x");
        assert_eq!(issues[1].kind, IssueKind::MissingType);
    }

    #[test]
    fn test_type_vocabulary_matches() {
        let cases = [
            ("string", json!("x"), true),
            ("string", json!(5), false),
            ("boolean", json!(true), true),
            ("boolean", json!(1), false),
            ("integer", json!(5), true),
            ("integer", json!(5.0), true),
            ("integer", json!(5.5), false),
            ("number", json!(5.5), true),
            ("number", json!("5.5"), false),
            ("array", json!([]), true),
            ("array", json!({}), false),
            ("object", json!({}), true),
            ("object", json!([]), false),
            ("null", json!(null), true),
            ("null", json!(0), false),
        ];
        for (name, value, expected) in cases {
            assert_eq!(
                declared_type_matches(name, &value),
                Some(expected),
                "type {name} vs {value}"
            );
        }
    }

    #[test]
    fn test_unknown_type_name_is_unconstrained() {
        assert_eq!(declared_type_matches("timestamp", &json!("x")), None);
        // Never flagged, and routed through the non-object branch.
        let document = json!({"type": "timestamp", "default": 5});
        assert!(lint_all(LintConfig::default(), &document).is_empty());
    }

    #[test]
    fn test_type_list_imposes_no_default_constraint() {
        let document = json!({"type": ["string", "null"], "default": 5});
        assert!(lint_all(LintConfig::default(), &document).is_empty());
    }

    #[test]
    fn test_properties_of_wrong_shape_reported_at_properties_path() {
        let document = json!({"type": "object", "properties": ["a", "b"]});
        let issues = lint_all(LintConfig::default(), &document);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "properties");
        assert_eq!(
            issues[0].kind,
            IssueKind::ExpectedObject {
                found: JsonKind::Array
            }
        );
    }

    #[test]
    fn test_empty_properties_counts_as_no_properties() {
        let document = json!({"type": "object", "properties": {}});
        let config = LintConfig {
            require_default: true,
            require_properties: true,
            ..LintConfig::default()
        };
        let issues = lint_all(config, &document);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, IssueKind::MissingDefaultNoProperties);
        assert_eq!(issues[1].kind, IssueKind::MissingProperties);
    }

    #[test]
    fn test_pattern_properties_accepted_silently() {
        let document = json!({
            "type": "object",
            "default": {},
            "patternProperties": {"^S_": {"type": "string"}}
        });
        let config = LintConfig {
            require_properties: true,
            ..LintConfig::default()
        };
        assert!(lint_all(config, &document).is_empty());
    }

    #[test]
    fn test_boolean_additional_properties_not_recursed_but_satisfies_switch() {
        let document = json!({"type": "object", "additionalProperties": true});
        let config = LintConfig {
            require_properties: true,
            ..LintConfig::default()
        };
        assert!(lint_all(config, &document).is_empty());
    }

    #[test]
    fn test_additional_properties_schema_walked_without_default_requirement() {
        let document = json!({
            "type": "object",
            "additionalProperties": {"type": "number"}
        });
        let issues = lint_all(require_default(), &document);
        // Root lacks a default and has no properties; the additional
        // properties schema itself is exempt from the default requirement.
        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.is_root());
        assert_eq!(issues[0].kind, IssueKind::MissingDefaultNoProperties);
    }

    #[test]
    fn test_array_items_inherit_narrowed_flag() {
        let document = json!({
            "type": "array",
            "default": [],
            "items": {"type": "string"}
        });
        // Root default narrows the flag; items are exempt too.
        assert!(lint_all(require_default(), &document).is_empty());
    }

    #[test]
    fn test_array_without_items_flagged_when_required() {
        let document = json!({"type": "array", "default": []});
        let config = LintConfig {
            require_default: true,
            require_items: true,
            ..LintConfig::default()
        };
        let issues = lint_all(config, &document);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MissingItems);
    }

    #[test]
    fn test_properties_traversed_in_declaration_order() {
        let document = json!({
            "type": "object",
            "properties": {
                "zebra": {"type": "string"},
                "alpha": {"type": "string"},
                "mid": {"type": "string"}
            }
        });
        let issues = lint_all(require_default(), &document);
        let paths: Vec<String> = issues.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(
            paths,
            [
                "properties.zebra",
                "properties.alpha",
                "properties.mid"
            ]
        );
    }

    #[test]
    fn test_depth_first_parent_issues_precede_children() {
        let document = json!({
            "type": "object",
            "properties": {
                "outer": {
                    "type": "object",
                    "properties": {
                        "inner": {"type": "string"}
                    }
                },
                "sibling": {"type": "string"}
            }
        });
        let issues = lint_all(require_default(), &document);
        let paths: Vec<String> = issues.iter().map(|i| i.path.to_string()).collect();
        // Depth-first: all of `outer`'s subtree before `sibling`.
        assert_eq!(
            paths,
            ["properties.outer.properties.inner", "properties.sibling"]
        );
    }

    #[test]
    fn test_depth_guard_reports_instead_of_descending() {
        let config = LintConfig {
            max_depth: 2,
            ..LintConfig::default()
        };
        let document = json!({
            "type": "object",
            "properties": {
                "a": {
                    "type": "object",
                    "properties": {
                        "b": {
                            "type": "object",
                            "properties": {
                                "c": {"type": "string"}
                            }
                        }
                    }
                }
            }
        });
        let issues = lint_all(config, &document);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "properties.a.properties.b.properties.c");
        assert_eq!(issues[0].kind, IssueKind::DepthLimitExceeded { limit: 2 });
    }

    #[test]
    fn test_lint_str_reports_parse_failure_at_root() {
        let linter = SchemaLinter::new(LintConfig::default());
        let issues = linter.lint_str("{not json");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.is_root());
        assert!(matches!(issues[0].kind, IssueKind::ParseError { .. }));
    }

    #[test]
    fn test_lint_str_on_well_formed_document() {
        let linter = SchemaLinter::new(LintConfig::default());
        let issues = linter.lint_str(r#"{"type": "string", "default": "x"}"#);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_iterator_is_lazy_and_resumable() {
        let document = json!({
            "type": "object",
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "string"}
            }
        });
        let linter = SchemaLinter::new(require_default());
        let mut issues = linter.lint(&document);
        let first = issues.next().unwrap();
        assert_eq!(first.path.to_string(), "properties.a");
        // Remaining findings still stream out after a partial consume.
        let rest: Vec<Issue> = issues.collect();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].path.to_string(), "properties.b");
    }
}
