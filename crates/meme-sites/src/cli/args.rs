//! CLI argument structs for all commands.

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the `sites` command
#[derive(Parser, Debug, Clone)]
pub struct SitesArgs {
    /// Plain-text MEME report (usually `meme.txt`)
    pub report: PathBuf,

    /// Only print the Nth block (1-based, in report order)
    #[arg(short, long, value_parser = validate_block_number)]
    pub block: Option<usize>,

    /// Skip sections that contain malformed lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    /// Plain-text MEME report (usually `meme.txt`)
    pub report: PathBuf,

    /// Skip sections that contain malformed lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,
}

/// Validate a 1-based block number.
pub fn validate_block_number(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a block number"))?;
    if n == 0 {
        return Err("Block numbers start at 1".to_string());
    }
    Ok(n)
}
