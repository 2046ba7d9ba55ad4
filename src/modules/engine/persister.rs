//! Write-back with backup

use dbfix_core::{Document, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Save a document back to its file, backing up the original first.
///
/// The backup lands at `{path}.backup`, overwriting any prior backup.
/// Backup and write failures both surface as errors; the caller decides
/// how they affect the batch.
pub fn persist_document(path: &Path, doc: &Document) -> Result<()> {
    if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup)?;
        info!("Created backup: {}", backup.display());
    }

    dbfix_codec::save_document(path, doc)
}

/// Sibling path the original file is copied to before writing
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("conf/config.json")),
            PathBuf::from("conf/config.json.backup")
        );
    }

    #[test]
    fn test_persist_creates_backup_of_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{\"database\": \"old\"}").unwrap();

        let mut doc = Document::new();
        doc.insert("database".to_string(), json!({"host": "h"}));
        persist_document(&path, &doc).unwrap();

        let backup = fs::read_to_string(backup_path(&path)).unwrap();
        assert_eq!(backup, "{\"database\": \"old\"}");
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"host\": \"h\""));
    }

    #[test]
    fn test_persist_overwrites_prior_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "first").unwrap();
        fs::write(backup_path(&path), "stale").unwrap();

        persist_document(&path, &Document::new()).unwrap();

        assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), "first");
    }

    #[test]
    fn test_persist_without_existing_file_writes_no_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        persist_document(&path, &Document::new()).unwrap();
        assert!(path.exists());
        assert!(!backup_path(&path).exists());
    }
}
