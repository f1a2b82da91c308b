//! Error types for meme-align operations.

use std::io;
use thiserror::Error;

/// The error type for meme-align operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading report lines.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Site data (or the end of the stream) was reached before any
    /// `MEME version` header line.
    #[error("no MEME version header found before site data")]
    MissingHeader,

    /// The report declares a MEME version older than 3.0.
    #[error("MEME version {version} is not supported (requires 3.0 or later)")]
    UnsupportedVersion {
        /// The version token exactly as written in the header.
        version: String,
    },

    /// The report is HTML-rendered rather than plain text.
    #[error("line {line_number}: report looks like HTML; only plain-text MEME output can be parsed")]
    HtmlFormatDetected {
        /// The 1-based line number of the `<TITLE>` marker.
        line_number: usize,
    },

    /// A line inside a site section matched no known pattern.
    ///
    /// The block being assembled is discarded. The parser itself stays
    /// usable: the next call resumes outside any section.
    #[error("line {line_number}: unrecognized line in site section: {text:?}")]
    UnrecognizedLine {
        /// The 1-based line number of the offending line.
        line_number: usize,
        /// The offending line, without its terminator.
        text: String,
    },

    /// An aligned site was built from inconsistent fields.
    #[error("invalid site '{identifier}': {reason}")]
    InvalidSite {
        /// Identifier of the rejected site.
        identifier: String,
        /// Which constraint was violated.
        reason: String,
    },

    /// The requested operation is not available for this format.
    #[error("{0} is not supported for MEME reports")]
    NotImplemented(&'static str),
}

impl Error {
    /// Returns `true` if the parser can be asked for the next block after
    /// this error.
    ///
    /// Only [`Error::UnrecognizedLine`] qualifies: the failed section is lost
    /// but later sections are still reachable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnrecognizedLine { .. })
    }
}

/// A specialized Result type for meme-align operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unrecognized_line_is_recoverable() {
        let unrecognized = Error::UnrecognizedLine {
            line_number: 7,
            text: "???".to_string(),
        };
        assert!(unrecognized.is_recoverable());

        assert!(!Error::MissingHeader.is_recoverable());
        assert!(!Error::HtmlFormatDetected { line_number: 1 }.is_recoverable());
        assert!(
            !Error::UnsupportedVersion {
                version: "2.4".to_string()
            }
            .is_recoverable()
        );
        assert!(!Error::NotImplemented("writing").is_recoverable());
    }

    #[test]
    fn messages_carry_context() {
        let err = Error::UnrecognizedLine {
            line_number: 12,
            text: "???garbage???".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 12"));
        assert!(msg.contains("???garbage???"));

        let err = Error::UnsupportedVersion {
            version: "2.4".to_string(),
        };
        assert!(err.to_string().contains("2.4"));
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
