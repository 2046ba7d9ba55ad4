//! JSON config codec

use dbfix_core::{Document, Result};

/// Parse a JSON string into a document (top-level object required)
pub fn parse(content: &str) -> Result<Document> {
    Ok(serde_json::from_str(content)?)
}

/// Serialize a document as 2-space-indented JSON
pub fn serialize(doc: &Document) -> Result<String> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let doc = parse(r#"{"database": "localhost:5432/app", "debug": true}"#).unwrap();
        assert_eq!(doc["database"], "localhost:5432/app");
        assert_eq!(doc["debug"], true);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(parse("[1, 2, 3]").is_err());
        assert!(parse("not json").is_err());
    }

    #[test]
    fn test_serialize_indent_and_order() {
        let mut doc = Document::new();
        doc.insert("zeta".to_string(), json!(1));
        doc.insert("alpha".to_string(), json!({"host": "localhost"}));

        let out = serialize(&doc).unwrap();
        // insertion order survives, 2-space indent, trailing newline
        assert!(out.starts_with("{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"host\": \"localhost\"\n"));
        assert!(out.ends_with("}\n"));
    }
}
