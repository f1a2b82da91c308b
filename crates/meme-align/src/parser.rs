//! Streaming parser for plain-text MEME reports.
//!
//! [`ReportParser`] pulls lines from a [`LineSource`] and returns one
//! [`AlignmentBlock`] per "sites sorted by position" section. Each call to
//! [`next_block`](ReportParser::next_block) reads only as far as the blank
//! line that closes the next section, so reports of any size can be
//! processed a block at a time.
//!
//! # Examples
//!
//! ```
//! use meme_align::ReportParser;
//!
//! let report = "MEME version 3.5\n\
//!               sites sorted by position\n\
//!               seq1   10   0.001   acgt   ACGTACGT   tt\n\
//!               seq2   25   0.002   .      GGCCGGCC   aa\n\
//!               \n";
//!
//! let mut parser = ReportParser::new(report.lines());
//! let block = parser.next_block().unwrap().unwrap();
//! assert_eq!(block.len(), 2);
//! assert_eq!(block.sites()[0].to_string(), "seq1/10-17");
//! assert!(parser.next_block().unwrap().is_none());
//! ```

use crate::block::AlignmentBlock;
use crate::error::{Error, Result};
use crate::patterns;
use crate::site::AlignedSite;
use crate::source::{LineReader, LineSource};
use crate::version::FormatVersion;
use crate::warning::{Warning, WarningCollector};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Mutable state of one parser instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    /// Version declared by the report header, once seen.
    format_version: Option<FormatVersion>,
    /// Set once a supported header has been read; never cleared.
    header_seen: bool,
    /// `true` while consuming the lines of a site section.
    in_section: bool,
    /// 1-based number of the last line consumed.
    line_number: usize,
}

impl ParserState {
    /// Version declared by the report header, if one has been read.
    #[must_use]
    pub fn format_version(&self) -> Option<&FormatVersion> {
        self.format_version.as_ref()
    }

    /// Whether a supported `MEME version` header has been read.
    #[must_use]
    pub fn header_seen(&self) -> bool {
        self.header_seen
    }

    /// Whether the parser is currently inside a site section.
    #[must_use]
    pub fn in_section(&self) -> bool {
        self.in_section
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Reads [`AlignmentBlock`]s out of a MEME report, one section per call.
///
/// The parser borrows nothing and owns its [`LineSource`]; it is not meant
/// to be shared between threads, but independent parsers over independent
/// sources can run side by side.
pub struct ReportParser<S> {
    source: S,
    state: ParserState,
    warnings: Option<WarningCollector>,
}

impl<S> std::fmt::Debug for ReportParser<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportParser")
            .field("state", &self.state)
            .field("warnings", &self.warnings.as_ref().map(WarningCollector::len))
            .finish_non_exhaustive()
    }
}

impl ReportParser<LineReader<BufReader<File>>> {
    /// Opens a report file for parsing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(LineReader::new(file)))
    }
}

impl<S: LineSource> ReportParser<S> {
    /// Creates a parser that pulls lines from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ParserState::default(),
            warnings: None,
        }
    }

    /// Records non-fatal diagnostics in `collector` as they occur.
    #[must_use]
    pub fn with_warnings(mut self, collector: WarningCollector) -> Self {
        self.warnings = Some(collector);
        self
    }

    /// Current parser state.
    #[must_use]
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Version declared by the report header, if one has been read.
    #[must_use]
    pub fn format_version(&self) -> Option<&FormatVersion> {
        self.state.format_version()
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.state.line_number
    }

    /// Consumes the parser, returning the line source.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Returns an iterator over the remaining blocks.
    ///
    /// The iterator ends after the stream is exhausted or after the first
    /// error that is not [recoverable](Error::is_recoverable).
    pub fn blocks(&mut self) -> Blocks<'_, S> {
        Blocks {
            parser: self,
            done: false,
        }
    }

    /// Reads the next completed block.
    ///
    /// Returns `Ok(None)` once the stream is exhausted with no further
    /// complete section. A section is only returned after its closing blank
    /// line has been read; a failed section yields nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingHeader`] if a section or the end of the stream is
    ///   reached before any `MEME version` header.
    /// - [`Error::UnsupportedVersion`] if the header declares a version
    ///   older than 3.0.
    /// - [`Error::HtmlFormatDetected`] if an HTML `<TITLE>` appears outside a
    ///   section.
    /// - [`Error::UnrecognizedLine`] if a section contains a line that is not
    ///   a site, decoration, or blank line. The parser can be called again
    ///   afterwards.
    /// - [`Error::Io`] if the line source fails.
    pub fn next_block(&mut self) -> Result<Option<AlignmentBlock>> {
        let mut pending = AlignmentBlock::new();
        let mut completed = false;
        self.state.in_section = false;

        while let Some(line) = self.source.read_line()? {
            self.state.line_number += 1;

            if !self.state.in_section {
                self.scan_preamble(&line)?;
                continue;
            }

            if let Some(fields) = patterns::parse_site_line(&line) {
                // A start so large that the span overflows still counts as a malformed line.
                match AlignedSite::from_central(fields.name, fields.central, fields.start) {
                    Ok(site) => pending.push(site),
                    Err(_) => return Err(self.abandon_section(line, pending.len())),
                }
            } else if patterns::is_decoration(&line) {
                continue;
            } else if patterns::is_blank(&line) {
                self.state.in_section = false;
                completed = true;
                break;
            } else {
                return Err(self.abandon_section(line, pending.len()));
            }
        }

        if !self.state.header_seen {
            return Err(Error::MissingHeader);
        }

        if completed {
            tracing::debug!(
                line_number = self.state.line_number,
                sites = pending.len(),
                "Completed site block"
            );
            return Ok(Some(pending));
        }

        if self.state.in_section {
            self.state.in_section = false;
            self.warn(Warning::TruncatedSection {
                line_number: self.state.line_number,
                discarded_sites: pending.len(),
            });
        }

        Ok(None)
    }

    /// Handles a line read outside any site section.
    fn scan_preamble(&mut self, line: &str) -> Result<()> {
        if let Some(token) = patterns::header_version(line) {
            let version = FormatVersion::parse(token)
                .filter(FormatVersion::is_supported)
                .ok_or_else(|| Error::UnsupportedVersion {
                    version: token.to_string(),
                })?;
            tracing::debug!(
                version = %version,
                line_number = self.state.line_number,
                "Found MEME header"
            );
            self.state.format_version = Some(version);
            self.state.header_seen = true;
        } else if patterns::is_html_title(line) {
            return Err(Error::HtmlFormatDetected {
                line_number: self.state.line_number,
            });
        } else if patterns::is_section_start(line) {
            if !self.state.header_seen {
                return Err(Error::MissingHeader);
            }
            tracing::debug!(
                line_number = self.state.line_number,
                "Entering site section"
            );
            self.state.in_section = true;
        }
        Ok(())
    }

    /// Leaves the current section after an unrecognized line.
    fn abandon_section(&mut self, text: String, discarded_sites: usize) -> Error {
        self.state.in_section = false;
        let line_number = self.state.line_number;
        self.warn(Warning::UnrecognizedLine {
            line_number,
            text: text.clone(),
            discarded_sites,
        });
        Error::UnrecognizedLine { line_number, text }
    }

    fn warn(&self, warning: Warning) {
        tracing::warn!(
            kind = warning.kind(),
            line_number = warning.line_number(),
            discarded_sites = warning.discarded_sites(),
            "{warning}"
        );
        if let Some(collector) = &self.warnings {
            collector.add(warning);
        }
    }
}

/// Iterator over the blocks of a report. See [`ReportParser::blocks`].
#[derive(Debug)]
pub struct Blocks<'a, S> {
    parser: &'a mut ReportParser<S>,
    done: bool,
}

impl<S: LineSource> Iterator for Blocks<'_, S> {
    type Item = Result<AlignmentBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parser.next_block() {
            Ok(Some(block)) => Some(Ok(block)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = !err.is_recoverable();
                Some(Err(err))
            }
        }
    }
}

impl<S: LineSource> std::iter::FusedIterator for Blocks<'_, S> {}

/// Reads every block of the report at `path`.
///
/// # Errors
///
/// Fails on the first parse or I/O error; see [`ReportParser::next_block`].
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Vec<AlignmentBlock>> {
    let mut parser = ReportParser::open(path)?;
    parser.blocks().collect()
}
