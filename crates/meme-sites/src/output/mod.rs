//! Output formatting for CLI commands.
//!
//! Blocks print either as FASTA-style text or as JSON. Text output is shaped
//! by [`OutputConfig`], which reads its settings from the environment.

pub mod color;

use crate::cli::LoadedReport;
use meme_align::{AlignedSite, AlignmentBlock};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

use color::{dimmed, heading, warning};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_LINE_WIDTH: usize = 60;
const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Residues per line in FASTA output; 0 disables wrapping.
    pub line_width: usize,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(line_width: usize, use_colors: bool) -> Self {
        Self {
            line_width,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `MEME_SITES_LINE_WIDTH`: Residues per FASTA line, 0 for no wrapping (default: 60)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `MEME_SITES_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let line_width = match env::var("MEME_SITES_LINE_WIDTH") {
            Ok(s) if !s.is_empty() => match s.trim().parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "MEME_SITES_LINE_WIDTH",
                        value = %s,
                        default = DEFAULT_LINE_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_LINE_WIDTH
                }
            },
            _ => DEFAULT_LINE_WIDTH,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("MEME_SITES_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            line_width,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH, true)
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print numbered blocks in the specified format
pub fn print_blocks(blocks: &[(usize, &AlignmentBlock)], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => write_blocks_text(&mut handle, blocks, &config),
        OutputMode::Json => write_json(&mut handle, &blocks_json(blocks)),
    }
}

/// Print a report summary in the specified format
pub fn print_report_info(report: &LoadedReport, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => {
            let width = get_terminal_width();
            write_report_info_text(&mut handle, report, width, &config)
        }
        OutputMode::Json => write_json(&mut handle, &report_info_json(report)),
    }
}

// ============================================================================
// JSON Formatting
// ============================================================================

#[derive(Serialize)]
struct NumberedBlock<'a> {
    block: usize,
    sites: &'a [AlignedSite],
}

fn blocks_json<'a>(blocks: &[(usize, &'a AlignmentBlock)]) -> Vec<NumberedBlock<'a>> {
    blocks
        .iter()
        .map(|(number, block)| NumberedBlock {
            block: *number,
            sites: block.sites(),
        })
        .collect()
}

fn report_info_json(report: &LoadedReport) -> serde_json::Value {
    serde_json::json!({
        "path": report.path.display().to_string(),
        "version": report.version,
        "blocks": report
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| serde_json::json!({
                "block": i + 1,
                "sites": block.len(),
            }))
            .collect::<Vec<_>>(),
        "warnings": report
            .warnings
            .iter()
            .map(|w| serde_json::json!({
                "kind": w.kind(),
                "line_number": w.line_number(),
                "discarded_sites": w.discarded_sites(),
                "message": w.description(),
            }))
            .collect::<Vec<_>>(),
    })
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn write_blocks_text<W: Write>(
    w: &mut W,
    blocks: &[(usize, &AlignmentBlock)],
    config: &OutputConfig,
) -> io::Result<()> {
    for (i, (number, block)) in blocks.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        let title = format!("# block {number} ({} sites)", block.len());
        writeln!(w, "{}", heading(&title, config))?;
        for site in *block {
            write_site_fasta(w, site, config.line_width)?;
        }
    }
    Ok(())
}

fn write_site_fasta<W: Write>(w: &mut W, site: &AlignedSite, line_width: usize) -> io::Result<()> {
    writeln!(w, ">{site}")?;
    let residues = site.residues().as_bytes();
    if line_width == 0 {
        w.write_all(residues)?;
        return writeln!(w);
    }
    for chunk in residues.chunks(line_width) {
        w.write_all(chunk)?;
        writeln!(w)?;
    }
    Ok(())
}

fn write_report_info_text<W: Write>(
    w: &mut W,
    report: &LoadedReport,
    width: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    let version = report.version.as_deref().unwrap_or("unknown");
    writeln!(w, "{} {}", dimmed("Report:  ", config), report.path.display())?;
    writeln!(w, "{} {}", dimmed("Version: ", config), version)?;
    writeln!(w, "{} {}", dimmed("Blocks:  ", config), report.blocks.len())?;
    for (i, block) in report.blocks.iter().enumerate() {
        let motif_width = block.sites().first().map_or(0, AlignedSite::len);
        writeln!(
            w,
            "  block {}: {} sites, width {}",
            i + 1,
            block.len(),
            motif_width
        )?;
    }

    writeln!(w, "{} {}", dimmed("Warnings:", config), report.warnings.len())?;
    for item in &report.warnings {
        for (j, line) in wrap_text(&item.description(), width.saturating_sub(4))
            .into_iter()
            .enumerate()
        {
            let prefix = if j == 0 { "  - " } else { "    " };
            writeln!(w, "{prefix}{}", warning(&line, config))?;
        }
    }
    Ok(())
}

fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    textwrap::wrap(text, max_width.max(20))
        .into_iter()
        .map(|s| s.into_owned())
        .collect()
}
