//! Line patterns of the plain-text MEME report.

use regex::Regex;
use std::sync::OnceLock;

/// Phrase that opens a site section.
pub(crate) const SECTION_MARKER: &str = "sites sorted by position";

/// Column header line printed above the sites.
pub(crate) const COLUMN_HEADER_MARKER: &str = "Sequence name";

fn header_regex() -> &'static Regex {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADER_REGEX
        .get_or_init(|| Regex::new(r"^\s*MEME\s+version\s+(\S+)").expect("Invalid header regex"))
}

fn html_regex() -> &'static Regex {
    static HTML_REGEX: OnceLock<Regex> = OnceLock::new();
    HTML_REGEX.get_or_init(|| Regex::new(r"(?i)<TITLE>").expect("Invalid HTML regex"))
}

// name, optional strand, start, p-value, left flank, central, right flank
fn site_regex() -> &'static Regex {
    static SITE_REGEX: OnceLock<Regex> = OnceLock::new();
    SITE_REGEX.get_or_init(|| {
        Regex::new(
            r"^\s*(\S+)\s+(?:([+-])\s+)?(\d+)\s+(\S+)\s+([ACGTacgt.]*)\s+([ACGTacgt]+)\s+([ACGTacgt.]*)\s*$",
        )
        .expect("Invalid site regex")
    })
}

/// Fields of one site line that survive into the data model.
///
/// The strand token, p-value and both flanks are matched so that malformed
/// lines are rejected, but they are dropped here on purpose: the output
/// model keeps only the identifier, the start coordinate and the central
/// residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SiteFields<'a> {
    pub(crate) name: &'a str,
    pub(crate) start: u64,
    pub(crate) central: &'a str,
}

/// Returns the version token of a `MEME version <token>` header line.
pub(crate) fn header_version(line: &str) -> Option<&str> {
    header_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns `true` for lines carrying an HTML `<TITLE>` tag.
pub(crate) fn is_html_title(line: &str) -> bool {
    html_regex().is_match(line)
}

/// Returns `true` for the line that opens a site section.
pub(crate) fn is_section_start(line: &str) -> bool {
    line.contains(SECTION_MARKER)
}

/// Matches a site line and extracts the retained fields.
///
/// A start of `0` or one that does not fit in a `u64` is treated as a
/// non-match.
pub(crate) fn parse_site_line(line: &str) -> Option<SiteFields<'_>> {
    let caps = site_regex().captures(line)?;
    let start = caps.get(3)?.as_str().parse::<u64>().ok().filter(|s| *s > 0)?;

    Some(SiteFields {
        name: caps.get(1)?.as_str(),
        start,
        central: caps.get(6)?.as_str(),
    })
}

/// Returns `true` for separator rules and the column header line.
pub(crate) fn is_decoration(line: &str) -> bool {
    line.starts_with('-') || line.contains(COLUMN_HEADER_MARKER)
}

/// Returns `true` for empty or whitespace-only lines.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
