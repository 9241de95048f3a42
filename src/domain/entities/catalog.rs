//! Catalog snapshot - immutable result of one enumeration pass

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::AssetLocator;

use super::VersionEntry;

/// Ordered mapping from locator to the artifacts it contains.
///
/// Built in one pass and never updated; callers wanting fresh data
/// enumerate again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    root: PathBuf,
    entries: BTreeMap<AssetLocator, Vec<VersionEntry>>,
}

impl CatalogSnapshot {
    pub fn new(root: impl Into<PathBuf>, entries: BTreeMap<AssetLocator, Vec<VersionEntry>>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All (locator, artifacts) pairs in locator order
    pub fn iter(&self) -> impl Iterator<Item = (&AssetLocator, &[VersionEntry])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Artifacts of one slot, lexicographically ordered by file name
    pub fn versions(&self, locator: &AssetLocator) -> &[VersionEntry] {
        self.entries
            .get(locator)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Latest artifact of one slot
    pub fn latest(&self, locator: &AssetLocator) -> Option<&VersionEntry> {
        self.versions(locator).last()
    }

    /// Distinct sequence names present in the snapshot
    pub fn sequences(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|l| l.sequence.as_str()).collect();
        names.dedup();
        names
    }

    /// Distinct shot names of one sequence
    pub fn shots(&self, sequence: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .keys()
            .filter(|l| l.sequence == sequence)
            .map(|l| l.shot.as_str())
            .collect();
        names.dedup();
        names
    }
}
