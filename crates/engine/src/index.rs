//! Date → version index and nearest-preceding lookup
//!
//! The index is rebuilt for every document and dropped once the lookup is
//! answered. Dates are unique keys, so a lookup never needs a tie-break.

use appver_temporal::SnapshotDate;
use std::collections::BTreeMap;

/// Chronological map from snapshot date to joined version string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionOnDateIndex {
    entries: BTreeMap<SnapshotDate, String>,
}

impl VersionOnDateIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the version seen on `date`.
    ///
    /// A second entry for the same date replaces the first; the replaced
    /// version is returned.
    pub fn insert(&mut self, date: SnapshotDate, version: String) -> Option<String> {
        self.entries.insert(date, version)
    }

    /// Version recorded on exactly `date`
    pub fn get(&self, date: &SnapshotDate) -> Option<&str> {
        self.entries.get(date).map(String::as_str)
    }

    /// Number of dated entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = (&SnapshotDate, &str)> {
        self.entries.iter().map(|(d, v)| (d, v.as_str()))
    }

    /// Version in effect on `perspective`: the entry with the latest date
    /// that is not after it.
    ///
    /// Returns `None` if every entry is after `perspective`.
    pub fn resolve(&self, perspective: SnapshotDate) -> Option<&str> {
        self.entries
            .range(..=perspective)
            .next_back()
            .map(|(_, v)| v.as_str())
    }
}

impl FromIterator<(SnapshotDate, String)> for VersionOnDateIndex {
    fn from_iter<I: IntoIterator<Item = (SnapshotDate, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
