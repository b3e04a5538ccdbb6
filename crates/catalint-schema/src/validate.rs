//! # Delegated Schema Compilation
//!
//! A document counts as a valid JSON Schema exactly when the `jsonschema`
//! crate can compile it under Draft 2020-12. All semantic knowledge lives
//! in that crate; this module only adapts its API and pins down two
//! behaviors:
//!
//! - `$ref` URIs are never fetched over the network. An installed retriever
//!   answers every unresolved URI with the permissive empty schema, so
//!   compilation proceeds offline and cross-file references are not a
//!   compile failure.
//! - Compilation diagnostics are surfaced verbatim in a structured error.

use jsonschema::{Retrieve, Uri};
use serde_json::Value;
use thiserror::Error;

/// Error from the schema compilation wrapper.
#[derive(Error, Debug)]
pub enum SchemaCompileError {
    /// The document could not be compiled as a JSON Schema.
    #[error("document is not a valid JSON Schema: {reason}")]
    InvalidSchema {
        /// The compiler's diagnostic.
        reason: String,
    },
}

/// Retriever that answers every `$ref` URI with the permissive empty
/// schema. Keeps compilation fully offline: unresolved references accept
/// anything instead of triggering a network request.
struct PermissiveRetriever;

impl Retrieve for PermissiveRetriever {
    fn retrieve(
        &self,
        _uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Ok(serde_json::json!({}))
    }
}

/// Compiles documents as Draft 2020-12 JSON Schemas.
///
/// Stateless; one compiler can be reused across any number of documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaCompiler;

impl SchemaCompiler {
    /// Create a compiler.
    pub fn new() -> Self {
        Self
    }

    /// Attempt to compile `document` as a JSON Schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaCompileError::InvalidSchema`] with the compiler's
    /// diagnostic when the document is not a valid schema.
    pub fn compile(&self, document: &Value) -> Result<(), SchemaCompileError> {
        let mut options = jsonschema::options();
        options.with_draft(jsonschema::Draft::Draft202012);
        options.with_retriever(PermissiveRetriever);

        options
            .build(document)
            .map(|_| ())
            .map_err(|e| SchemaCompileError::InvalidSchema {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_schema_compiles() {
        let document = json!({
            "type": "object",
            "properties": {
                "name": {"type": "string", "default": ""}
            },
            "additionalProperties": false
        });
        SchemaCompiler::new().compile(&document).unwrap();
    }

    #[test]
    fn test_empty_schema_compiles() {
        SchemaCompiler::new().compile(&json!({})).unwrap();
    }

    #[test]
    fn test_invalid_type_keyword_rejected() {
        let document = json!({"type": "not-a-real-type"});
        let err = SchemaCompiler::new().compile(&document).unwrap_err();
        assert!(matches!(err, SchemaCompileError::InvalidSchema { .. }));
    }

    #[test]
    fn test_malformed_keyword_shape_rejected() {
        // `properties` must be an object of schemas.
        let document = json!({"type": "object", "properties": ["a", "b"]});
        let err = SchemaCompiler::new().compile(&document).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not a valid JSON Schema"), "got: {message}");
    }

    #[test]
    fn test_unresolved_ref_is_not_a_compile_failure() {
        let document = json!({
            "type": "object",
            "properties": {
                "nested": {"$ref": "https://example.invalid/other.schema.json"}
            }
        });
        SchemaCompiler::new().compile(&document).unwrap();
    }
}
