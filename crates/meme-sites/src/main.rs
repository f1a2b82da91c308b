//! meme-sites CLI binary.

use anyhow::Result;
use meme_sites::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for --json consumers.
    // Example: RUST_LOG=meme_sites=debug,meme_align=debug meme-sites info meme.txt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("meme_sites=info,meme_align=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting meme-sites CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("meme-sites completed successfully");
    Ok(())
}
