//! Non-fatal diagnostics raised while reading a report.
//!
//! A [`WarningCollector`] handed to the parser with
//! [`ReportParser::with_warnings`](crate::ReportParser::with_warnings)
//! records every section that had to be thrown away, together with the line
//! that caused it. The parser also logs each warning through `tracing`.
//!
//! # Examples
//!
//! ```
//! use meme_align::warning::{Warning, WarningCollector};
//!
//! let collector = WarningCollector::new();
//! collector.add(Warning::UnrecognizedLine {
//!     line_number: 42,
//!     text: "???garbage???".to_string(),
//!     discarded_sites: 3,
//! });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(warnings[0].line_number(), 42);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

/// A diagnostic about report content that was skipped or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A site section contained a line matching none of the known patterns.
    ///
    /// The section's block was discarded; the same problem is also returned
    /// to the caller as [`Error::UnrecognizedLine`](crate::Error::UnrecognizedLine).
    UnrecognizedLine {
        /// The 1-based line number of the offending line.
        line_number: usize,
        /// The offending line.
        text: String,
        /// Sites already read from the section before it was abandoned.
        discarded_sites: usize,
    },

    /// The stream ended inside a site section, before its closing blank line.
    TruncatedSection {
        /// The 1-based number of the last line in the stream.
        line_number: usize,
        /// Sites read from the unterminated section.
        discarded_sites: usize,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::UnrecognizedLine { line_number, .. }
            | Self::TruncatedSection { line_number, .. } => *line_number,
        }
    }

    /// Number of sites lost along with the discarded section.
    #[must_use]
    pub fn discarded_sites(&self) -> usize {
        match self {
            Self::UnrecognizedLine {
                discarded_sites, ..
            }
            | Self::TruncatedSection {
                discarded_sites, ..
            } => *discarded_sites,
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use meme_align::warning::Warning;
    ///
    /// let warning = Warning::TruncatedSection {
    ///     line_number: 80,
    ///     discarded_sites: 2,
    /// };
    /// let desc = warning.description();
    /// assert!(desc.contains("line 80"));
    /// assert!(desc.contains("2 sites"));
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::UnrecognizedLine {
                line_number,
                text,
                discarded_sites,
            } => format!(
                "line {line_number}: unrecognized line {text:?}; discarded {discarded_sites} sites"
            ),
            Self::TruncatedSection {
                line_number,
                discarded_sites,
            } => format!(
                "line {line_number}: report ended inside a site section; discarded {discarded_sites} sites"
            ),
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnrecognizedLine { .. } => "unrecognized_line",
            Self::TruncatedSection { .. } => "truncated_section",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

/// A thread-safe collector for warnings raised during parsing.
///
/// Clones share the same storage, so the caller can keep one handle while
/// the parser owns another.
///
/// A poisoned lock is recovered rather than propagated; a pushed warning is
/// never left half-written.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Creates a new empty `WarningCollector`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning to the collector.
    pub fn add(&self, warning: Warning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning);
    }

    /// Returns the number of warnings collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no warnings have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of all collected warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears all collected warnings.
    pub fn clear(&self) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Consumes the collector and returns all collected warnings.
    ///
    /// If other clones are still alive the warnings are copied out.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        Arc::try_unwrap(self.warnings)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .unwrap_or_else(|arc| {
                arc.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone()
            })
    }
}
