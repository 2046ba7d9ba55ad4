//! Configuration document model

use serde_json::Value;

/// The whole parsed content of one configuration file.
///
/// `serde_json` is built with `preserve_order`, so documents keep the
/// key order of the source file across a load/save round trip.
pub type Document = serde_json::Map<String, Value>;

/// Field names a database configuration may appear under, checked in order.
pub const DB_FIELD_KEYS: [&str; 5] = ["database", "db", "DATABASE_URL", "DB_URL", "DATABASE"];

/// Shape of a database config field value, dispatched explicitly rather
/// than re-inspecting the value at each use site.
#[derive(Debug)]
pub enum FieldShape<'a> {
    /// A raw connection string (URL or `host:port/name` shorthand)
    RawString(&'a str),

    /// An already-structured mapping with database sub-keys
    RawMapping(&'a Document),

    /// Anything else (number, bool, array, null); left untouched
    Other,
}

impl<'a> FieldShape<'a> {
    /// Classify a field value
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(s) => FieldShape::RawString(s),
            Value::Object(map) => FieldShape::RawMapping(map),
            _ => FieldShape::Other,
        }
    }
}
