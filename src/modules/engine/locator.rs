//! Candidate config file discovery

use std::path::{Path, PathBuf};

/// Base names a config file commonly goes by
const CONFIG_NAMES: [&str; 7] = [
    "config",
    "settings",
    "database",
    "db",
    "app",
    "application",
    ".env",
];

/// Supported extensions, in dispatch order
const CONFIG_EXTENSIONS: [&str; 4] = [".json", ".yaml", ".yml", ".env"];

/// Enumerate candidate config files under a directory.
///
/// The candidate set is the cross product of the fixed name and extension
/// lists, filtered by existence. No recursion into subdirectories.
pub fn find_config_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for name in CONFIG_NAMES {
        for ext in CONFIG_EXTENSIONS {
            let path = dir.join(format!("{}{}", name, ext));
            if path.exists() {
                files.push(path);
            }
        }
    }

    files
}
