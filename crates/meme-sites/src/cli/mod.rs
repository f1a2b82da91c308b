//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `sites`: Print the aligned sites of every motif section
//! - `info`: Summarize a report (version, blocks, warnings)
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! meme-sites sites meme.txt
//! meme-sites sites meme.txt --block 2 --json
//! meme-sites info meme.txt --skip-malformed
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{InfoArgs, SitesArgs, validate_block_number};
pub use execute::{LoadedReport, load_report};

/// meme-sites - extract aligned motif sites from MEME reports
///
/// Reads the "sites sorted by position" sections of a plain-text MEME
/// report (version 3.0 or later) and prints one alignment block per motif.
#[derive(Parser, Debug)]
#[command(name = "meme-sites")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the aligned sites of each motif
    ///
    /// Every "sites sorted by position" section becomes one block of
    /// FASTA-style records named `sequence/start-end`.
    Sites(SitesArgs),

    /// Summarize a report
    ///
    /// Shows the MEME version, the number of site blocks, the sites per
    /// block, and any sections that had to be discarded.
    Info(InfoArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Sites(args)) => execute::execute_sites(args, output_mode),
            Some(Commands::Info(args)) => execute::execute_info(args, output_mode),
            None => {
                println!("meme-sites: extract aligned motif sites from MEME reports");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["meme-sites"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_sites_defaults() {
        let cli = Cli::try_parse_from(["meme-sites", "sites", "meme.txt"]).unwrap();
        match cli.command {
            Some(Commands::Sites(args)) => {
                assert_eq!(args.report, Path::new("meme.txt"));
                assert_eq!(args.block, None);
                assert!(!args.skip_malformed);
            }
            other => panic!("expected sites command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sites_with_options() {
        let cli = Cli::try_parse_from([
            "meme-sites",
            "sites",
            "meme.txt",
            "--block",
            "2",
            "--skip-malformed",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Sites(args)) => {
                assert_eq!(args.block, Some(2));
                assert!(args.skip_malformed);
            }
            other => panic!("expected sites command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_block_zero() {
        let result = Cli::try_parse_from(["meme-sites", "sites", "meme.txt", "-b", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_info_requires_report() {
        assert!(Cli::try_parse_from(["meme-sites", "info"]).is_err());

        let cli = Cli::try_parse_from(["meme-sites", "--json", "info", "r.txt"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Info(_))));
    }
}
