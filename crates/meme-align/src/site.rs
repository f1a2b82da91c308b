//! Aligned motif sites.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Orientation of a site relative to its input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strand {
    /// Forward strand, written `+`.
    #[serde(rename = "+")]
    Forward,
    /// Reverse strand, written `-`.
    #[serde(rename = "-")]
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("+"),
            Self::Reverse => f.write_str("-"),
        }
    }
}

/// One occurrence of a motif in an input sequence.
///
/// Coordinates are 1-based and inclusive, and always span exactly the
/// residues: `end - start + 1 == residues.len()`. Sites are immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AlignedSite {
    identifier: String,
    start: u64,
    end: u64,
    strand: Strand,
    residues: String,
}

impl AlignedSite {
    /// Creates a site from all of its fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSite`] if the identifier is empty or contains
    /// whitespace, the residues are empty, `start` is zero, or `end` does not
    /// equal `start + residues.len() - 1`.
    pub fn new(
        identifier: impl Into<String>,
        residues: impl Into<String>,
        start: u64,
        end: u64,
        strand: Strand,
    ) -> Result<Self> {
        let identifier = identifier.into();
        let residues = residues.into();

        let invalid = |reason: String| Error::InvalidSite {
            identifier: identifier.clone(),
            reason,
        };

        if identifier.is_empty() || identifier.chars().any(char::is_whitespace) {
            return Err(invalid(
                "identifier must be a non-empty token without whitespace".to_string(),
            ));
        }
        if residues.is_empty() {
            return Err(invalid("residues must not be empty".to_string()));
        }
        if start == 0 {
            return Err(invalid("coordinates are 1-based; start must be at least 1".to_string()));
        }

        let expected_end = start
            .checked_add(residues.len() as u64 - 1)
            .ok_or_else(|| invalid(format!("start {start} overflows with {} residues", residues.len())))?;
        if end != expected_end {
            return Err(invalid(format!(
                "span {start}-{end} does not cover {} residues (expected end {expected_end})",
                residues.len()
            )));
        }

        Ok(Self {
            identifier,
            start,
            end,
            strand,
            residues,
        })
    }

    /// Creates a forward-strand site from a report's central field.
    ///
    /// The residues are upper-cased and `end` is derived from their length.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AlignedSite::new`].
    pub fn from_central(identifier: impl Into<String>, central: &str, start: u64) -> Result<Self> {
        let residues = central.to_ascii_uppercase();
        let end = start
            .saturating_add(residues.len() as u64)
            .saturating_sub(1);
        Self::new(identifier, residues, start, end, Strand::Forward)
    }

    /// The sequence name the site was found in.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// First residue position (1-based, inclusive).
    #[must_use]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last residue position (1-based, inclusive).
    #[must_use]
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Site orientation.
    #[must_use]
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// The upper-case motif residues.
    #[must_use]
    pub fn residues(&self) -> &str {
        &self.residues
    }

    /// Number of residues in the site.
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false`; sites carry at least one residue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl fmt::Display for AlignedSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}-{}", self.identifier, self.start, self.end)
    }
}
