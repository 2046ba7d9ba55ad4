//! CLI commands

mod fix;

pub use fix::FixCommand;

use clap::Parser;

/// dbfix - Normalizes database connection settings in local config files
#[derive(Parser, Debug)]
#[command(name = "dbfix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub fix: FixCommand,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["dbfix"]).unwrap();
        assert_eq!(cli.fix.dir, ".");
        assert!(cli.fix.file.is_none());
        assert!(!cli.fix.dry_run);
        assert!(!cli.fix.sparse);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_full() {
        let cli = Cli::try_parse_from([
            "dbfix",
            "--dir",
            "conf",
            "--file",
            "conf/app.yaml",
            "--dry-run",
            "--sparse",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.fix.dir, "conf");
        assert_eq!(cli.fix.file.as_deref(), Some("conf/app.yaml"));
        assert!(cli.fix.dry_run);
        assert!(cli.fix.sparse);
        assert!(cli.verbose);
    }
}
