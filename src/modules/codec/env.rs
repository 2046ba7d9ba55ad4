//! Line-oriented `.env` config codec

use dbfix_core::Document;
use serde_json::Value;

/// Parse `.env` content into a document.
///
/// Blank lines, `#` comments, and lines without `=` are skipped. Values
/// are trimmed and stripped of surrounding quote characters; every value
/// loads as a string.
pub fn parse(content: &str) -> Document {
    let mut doc = Document::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        doc.insert(key.trim().to_string(), Value::String(value.to_string()));
    }

    doc
}

/// Serialize a document as `KEY=value` lines.
///
/// Keys are upper-cased; one level of nested mapping is flattened into
/// `KEY_SUBKEY=value` lines.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();

    for (key, value) in doc {
        match value {
            Value::Object(map) => {
                for (sub_key, sub_value) in map {
                    out.push_str(&format!(
                        "{}_{}={}\n",
                        key.to_uppercase(),
                        sub_key.to_uppercase(),
                        render_scalar(sub_value)
                    ));
                }
            }
            _ => out.push_str(&format!("{}={}\n", key.to_uppercase(), render_scalar(value))),
        }
    }

    out
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // deeper composites get compact JSON rather than being dropped
        other => other.to_string(),
    }
}
