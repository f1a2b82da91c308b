//! Alignment blocks: the sites of one "sites sorted by position" section.

use crate::site::AlignedSite;
use serde::Serialize;

/// The aligned sites of a single motif section, in report order.
///
/// A block only reaches callers once its section has been closed by a blank
/// line; the parser never hands out a partially read block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentBlock {
    sites: Vec<AlignedSite>,
}

impl AlignmentBlock {
    /// Creates an empty block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, site: AlignedSite) {
        self.sites.push(site);
    }

    /// The sites in the order they appeared in the report.
    #[must_use]
    pub fn sites(&self) -> &[AlignedSite] {
        &self.sites
    }

    /// Number of sites in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns `true` if the section listed no sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterates over the sites in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, AlignedSite> {
        self.sites.iter()
    }

    /// Sequence identifiers of the sites, in report order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(AlignedSite::identifier)
    }

    /// Consumes the block, returning its sites.
    #[must_use]
    pub fn into_sites(self) -> Vec<AlignedSite> {
        self.sites
    }
}

impl From<Vec<AlignedSite>> for AlignmentBlock {
    fn from(sites: Vec<AlignedSite>) -> Self {
        Self { sites }
    }
}

impl IntoIterator for AlignmentBlock {
    type Item = AlignedSite;
    type IntoIter = std::vec::IntoIter<AlignedSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.into_iter()
    }
}

impl<'a> IntoIterator for &'a AlignmentBlock {
    type Item = &'a AlignedSite;
    type IntoIter = std::slice::Iter<'a, AlignedSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}
