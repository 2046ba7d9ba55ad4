//! Per-file fix pipeline and batch driver

use dbfix_core::{Document, FieldPolicy, Normalizer, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::locator;
use crate::persister;

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// The file changed (or would change, under dry run) and was persisted
    Fixed,

    /// The file was already canonical
    Clean,

    /// Load, normalize, or save failed; the file was left as it was
    Skipped,
}

/// Batch summary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixReport {
    pub checked: usize,
    pub fixed: usize,
}

/// Runs the load → normalize → compare → persist pipeline over config files
#[derive(Debug)]
pub struct ConfigFixer {
    dir: PathBuf,
    normalizer: Normalizer,
    dry_run: bool,
}

impl ConfigFixer {
    /// Create a fixer scanning the given directory
    pub fn new(dir: impl Into<PathBuf>, policy: FieldPolicy, dry_run: bool) -> Self {
        Self {
            dir: dir.into(),
            normalizer: Normalizer::new(policy),
            dry_run,
        }
    }

    /// Candidate config files under the fixer's directory
    pub fn find_config_files(&self) -> Vec<PathBuf> {
        locator::find_config_files(&self.dir)
    }

    /// Fix a single file.
    ///
    /// Failures never escape: an unreadable or unparseable file loads as
    /// empty and a coercion failure leaves the file unmodified, so a batch
    /// always runs to completion.
    pub fn fix_file(&self, path: &Path) -> FixOutcome {
        info!("Checking config file: {}", path.display());

        let doc = self.load_or_empty(path);
        if doc.is_empty() {
            return FixOutcome::Skipped;
        }

        let mut fixed = doc.clone();
        let changed = match self.normalizer.fix_document(&mut fixed) {
            Ok(changed) => changed,
            Err(e) => {
                warn!("Normalization failed for {}: {}", path.display(), e);
                return FixOutcome::Skipped;
            }
        };

        if !changed {
            info!("No fix needed: {}", path.display());
            return FixOutcome::Clean;
        }

        if self.dry_run {
            info!("Would fix (dry run): {}", path.display());
            return FixOutcome::Fixed;
        }

        match persister::persist_document(path, &fixed) {
            Ok(()) => {
                info!("Fixed config file: {}", path.display());
                FixOutcome::Fixed
            }
            Err(e) => {
                error!("Failed to save {}: {}", path.display(), e);
                FixOutcome::Skipped
            }
        }
    }

    /// Fix every candidate file under the directory, sequentially
    pub fn fix_all(&self) -> FixReport {
        let files = self.find_config_files();
        if files.is_empty() {
            warn!("No config files found in {}", self.dir.display());
            return FixReport::default();
        }

        let mut report = FixReport::default();
        for path in files {
            report.checked += 1;
            if self.fix_file(&path) == FixOutcome::Fixed {
                report.fixed += 1;
            }
        }

        info!("Done, fixed {} config file(s)", report.fixed);
        report
    }

    /// Normalized view of one file without touching disk.
    ///
    /// Load failures degrade to an empty document, matching the pipeline;
    /// coercion failures propagate so the caller can report them.
    pub fn normalized_document(&self, path: &Path) -> Result<Document> {
        let mut doc = self.load_or_empty(path);
        self.normalizer.fix_document(&mut doc)?;
        Ok(doc)
    }

    fn load_or_empty(&self, path: &Path) -> Document {
        match dbfix_codec::load_document(path) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(
                    "Failed to load {}, treating as empty: {}",
                    path.display(),
                    e
                );
                Document::new()
            }
        }
    }
}
