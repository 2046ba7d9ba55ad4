//! Fix command implementation

use anyhow::Context;
use clap::Args;
use dbfix_core::FieldPolicy;
use dbfix_engine::{ConfigFixer, FixOutcome};
use std::path::Path;
use tracing::{error, info};

/// Fix command arguments
#[derive(Args, Debug)]
pub struct FixCommand {
    /// Directory to scan for config files
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Fix exactly one config file instead of scanning
    #[arg(long)]
    pub file: Option<String>,

    /// Compute and report the result without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Normalize connection strings to the five connection keys only,
    /// omitting sslmode/max_connections/connect_timeout (legacy convention;
    /// a later run will fill them in)
    #[arg(long)]
    pub sparse: bool,
}

impl FixCommand {
    /// Execute the fix command.
    ///
    /// Returns false when the process should exit non-zero: a missing
    /// explicit `--file` target, a failed single-file fix, or a scan that
    /// fixed nothing.
    pub fn execute(&self) -> anyhow::Result<bool> {
        let policy = if self.sparse {
            FieldPolicy::Sparse
        } else {
            FieldPolicy::Complete
        };

        match &self.file {
            Some(file) => self.fix_single(Path::new(file), policy),
            None => Ok(self.fix_directory(policy)),
        }
    }

    /// Fix one explicit file; a missing path is fatal
    fn fix_single(&self, path: &Path, policy: FieldPolicy) -> anyhow::Result<bool> {
        if !path.exists() {
            error!("Config file does not exist: {}", path.display());
            return Ok(false);
        }

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let fixer = ConfigFixer::new(dir, policy, self.dry_run);

        if self.dry_run {
            let doc = fixer
                .normalized_document(path)
                .with_context(|| format!("failed to normalize {}", path.display()))?;
            info!("Dry run, file will not be modified");
            println!("{}", serde_json::to_string_pretty(&doc)?);
            return Ok(true);
        }

        match fixer.fix_file(path) {
            FixOutcome::Fixed | FixOutcome::Clean => Ok(true),
            FixOutcome::Skipped => Ok(false),
        }
    }

    /// Scan a directory; reports failure when nothing got fixed
    fn fix_directory(&self, policy: FieldPolicy) -> bool {
        if self.dry_run {
            info!("Dry run, files will not be modified");
        }

        let fixer = ConfigFixer::new(self.dir.as_str(), policy, self.dry_run);
        let report = fixer.fix_all();

        report.fixed > 0
    }
}
