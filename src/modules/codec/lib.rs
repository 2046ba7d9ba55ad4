//! Config file parsing and serialization for dbfix
//!
//! This crate reads and writes the three supported config formats (JSON,
//! YAML, `.env`) into and out of the in-memory [`Document`] model,
//! dispatching on the file extension.

pub mod env;
pub mod format;
pub mod json;
pub mod yaml;

pub use format::Format;

use dbfix_core::{DbfixError, Document, Result};
use std::path::Path;

/// Load a config file into a document, picking the codec from the path
pub fn load_document(path: &Path) -> Result<Document> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| DbfixError::Codec(format!("Failed to read '{}': {}", path.display(), e)))?;

    parse_string(format, &content)
}

/// Parse config content in the given format
pub fn parse_string(format: Format, content: &str) -> Result<Document> {
    match format {
        Format::Json => json::parse(content),
        Format::Yaml => yaml::parse(content),
        Format::Env => Ok(env::parse(content)),
    }
}

/// Serialize a document back to the format matching the path and write it
pub fn save_document(path: &Path, doc: &Document) -> Result<()> {
    let content = serialize_string(Format::from_path(path)?, doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Serialize a document to config content in the given format
pub fn serialize_string(format: Format, doc: &Document) -> Result<String> {
    match format {
        Format::Json => json::serialize(doc),
        Format::Yaml => yaml::serialize(doc),
        Format::Env => Ok(env::serialize(doc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_canonical_document() {
        let mut doc = Document::new();
        doc.insert("database".to_string(), json!({"host": "h", "port": 5432}));
        doc.insert("name".to_string(), json!("app"));

        for format in [Format::Json, Format::Yaml] {
            let content = serialize_string(format, &doc).unwrap();
            let loaded = parse_string(format, &content).unwrap();
            assert_eq!(loaded, doc);
        }
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = load_document(Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, DbfixError::UnsupportedFormat(_)));
    }
}
