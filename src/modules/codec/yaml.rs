//! YAML config codec

use dbfix_core::{DbfixError, Document, Result};
use serde_json::Value;

/// Parse a YAML string into a document (top-level mapping required).
///
/// Values are transcoded into JSON values, so YAML-only constructs such as
/// non-string keys are rejected as parse errors.
pub fn parse(content: &str) -> Result<Document> {
    let value: Value = serde_yaml::from_str(content)
        .map_err(|e| DbfixError::Codec(format!("YAML parse error: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DbfixError::Codec(format!(
            "expected a top-level mapping, got: {}",
            other
        ))),
    }
}

/// Serialize a document as block-style YAML
pub fn serialize(doc: &Document) -> Result<String> {
    serde_yaml::to_string(doc).map_err(|e| DbfixError::Codec(format!("YAML write error: {}", e)))
}
