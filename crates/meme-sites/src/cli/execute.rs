//! Command execution logic.

use anyhow::{Context, Result, bail};
use meme_align::{AlignmentBlock, ReportParser, Warning, WarningCollector};
use std::path::{Path, PathBuf};

use super::args::{InfoArgs, SitesArgs};
use crate::output::{self, OutputMode};

/// Everything read from one report.
#[derive(Debug)]
pub struct LoadedReport {
    /// Path the report was read from.
    pub path: PathBuf,
    /// Version declared in the report header.
    pub version: Option<String>,
    /// Site blocks in report order.
    pub blocks: Vec<AlignmentBlock>,
    /// Sections that were discarded while reading.
    pub warnings: Vec<Warning>,
}

/// Read every block from the report at `path`.
///
/// With `skip_malformed`, sections containing unrecognized lines are logged
/// and skipped; otherwise the first one aborts the load.
pub fn load_report(path: &Path, skip_malformed: bool) -> Result<LoadedReport> {
    let collector = WarningCollector::new();
    let mut parser = ReportParser::open(path)
        .with_context(|| format!("Failed to open report {}", path.display()))?
        .with_warnings(collector.clone());

    let mut blocks = Vec::new();
    loop {
        match parser.next_block() {
            Ok(Some(block)) => blocks.push(block),
            Ok(None) => break,
            Err(err) if skip_malformed && err.is_recoverable() => {
                tracing::info!(error = %err, "Skipping malformed section");
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to parse report {}", path.display()));
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        blocks = blocks.len(),
        lines = parser.line_number(),
        "Report loaded"
    );

    Ok(LoadedReport {
        path: path.to_path_buf(),
        version: parser.format_version().map(ToString::to_string),
        blocks,
        warnings: collector.into_warnings(),
    })
}

/// Execute the sites command
pub fn execute_sites(args: &SitesArgs, output_mode: OutputMode) -> Result<()> {
    let report = load_report(&args.report, args.skip_malformed)?;

    let selected: Vec<(usize, &AlignmentBlock)> = match args.block {
        Some(n) => {
            let Some(block) = n.checked_sub(1).and_then(|i| report.blocks.get(i)) else {
                bail!(
                    "Block {} not found; {} contains {} blocks",
                    n,
                    report.path.display(),
                    report.blocks.len()
                );
            };
            vec![(n, block)]
        }
        None => report
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| (i + 1, block))
            .collect(),
    };

    output::print_blocks(&selected, output_mode)?;
    Ok(())
}

/// Execute the info command
pub fn execute_info(args: &InfoArgs, output_mode: OutputMode) -> Result<()> {
    let report = load_report(&args.report, args.skip_malformed)?;
    output::print_report_info(&report, output_mode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn report_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const MIXED: &str = "MEME version 4.11.2\n\
                         sites sorted by position\n\
                         good1 5 0.1 . ACGT .\n\
                         \n\
                         sites sorted by position\n\
                         bad 5 0.1 . ACGT .\n\
                         oops\n\
                         \n\
                         sites sorted by position\n\
                         good2 8 0.1 . TTTT .\n\
                         \n";

    #[test]
    fn load_report_reads_all_blocks() {
        let file = report_file(
            "MEME version 4.0\nsites sorted by position\nx 1 0.1 . AC .\n\n",
        );
        let report = load_report(file.path(), false).unwrap();
        assert_eq!(report.version.as_deref(), Some("4.0"));
        assert_eq!(report.blocks.len(), 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn load_report_fails_on_malformed_section_by_default() {
        let file = report_file(MIXED);
        let err = load_report(file.path(), false).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("Failed to parse report"));
        assert!(chain.contains("oops"));
    }

    #[test]
    fn load_report_can_skip_malformed_sections() {
        let file = report_file(MIXED);
        let report = load_report(file.path(), true).unwrap();

        let names: Vec<_> = report
            .blocks
            .iter()
            .flat_map(|block| block.identifiers())
            .collect();
        assert_eq!(names, ["good1", "good2"]);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line_number(), 7);
    }

    #[test]
    fn skip_malformed_does_not_hide_fatal_errors() {
        let file = report_file("MEME version 2.4\n");
        let err = load_report(file.path(), true).unwrap_err();
        assert!(format!("{err:#}").contains("2.4"));
    }

    #[test]
    fn load_report_reports_missing_file() {
        let err = load_report(Path::new("/definitely/not/here/meme.txt"), false).unwrap_err();
        assert!(err.to_string().contains("Failed to open report"));
    }
}
