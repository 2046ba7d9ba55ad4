//! Error types for dbfix

use thiserror::Error;

/// Main error type for dbfix operations
#[derive(Error, Debug)]
pub enum DbfixError {
    /// Format-specific parse or serialize error
    #[error("Codec error: {0}")]
    Codec(String),

    /// A config value could not be cast to its canonical type
    #[error("Type coercion error: {0}")]
    Coercion(String),

    /// File path with an extension no codec handles
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DbfixError {
    /// Returns true if this error only invalidates a single file's
    /// normalization and the batch should keep going
    pub fn is_per_file(&self) -> bool {
        matches!(self, DbfixError::Coercion(_))
    }
}

/// Result type alias using DbfixError
pub type Result<T> = std::result::Result<T, DbfixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_is_per_file() {
        assert!(DbfixError::Coercion("port".into()).is_per_file());
        assert!(!DbfixError::Codec("bad yaml".into()).is_per_file());
    }

    #[test]
    fn test_error_display() {
        let err = DbfixError::UnsupportedFormat("config.toml".into());
        assert_eq!(err.to_string(), "Unsupported config format: config.toml");
    }
}
