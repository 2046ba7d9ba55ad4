//! Config file format detection

use dbfix_core::{DbfixError, Result};
use std::path::Path;

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Env,
}

impl Format {
    /// Detect the format from a file path.
    ///
    /// Matches on the name suffix rather than `Path::extension` so that a
    /// bare `.env` file (no stem) is still recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".json") {
            Ok(Format::Json)
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            Ok(Format::Yaml)
        } else if name.ends_with(".env") {
            Ok(Format::Env)
        } else {
            Err(DbfixError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path(Path::new("config.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("config.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("db.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("app.env")).unwrap(), Format::Env);
    }

    #[test]
    fn test_bare_dotenv_file() {
        assert_eq!(Format::from_path(Path::new(".env")).unwrap(), Format::Env);
        assert_eq!(Format::from_path(Path::new("dir/.env")).unwrap(), Format::Env);
    }

    #[test]
    fn test_unsupported() {
        assert!(Format::from_path(Path::new("config.toml")).is_err());
        assert!(Format::from_path(Path::new("config")).is_err());
    }
}
