//! Asset catalog
//!
//! Enumerates sequences, shots and per-type artifacts beneath a project
//! root. "Latest" is the last file name in lexicographic order, which is
//! only correct because versions are zero-padded to a fixed width.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{CatalogSnapshot, VersionEntry};
use crate::domain::ports::FileSystem;
use crate::domain::services::path_convention;
use crate::domain::value_objects::{AssetLocator, AssetType};
use crate::error::{ShotpubError, ShotpubResult};

/// Read-only view over the publish tree of one project
pub struct AssetCatalog<F: FileSystem> {
    fs: F,
    root: PathBuf,
}

impl<F: FileSystem> AssetCatalog<F> {
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sequence names under `{root}/publish/sequence`, sorted.
    ///
    /// Empty when the publish tree does not exist.
    pub fn enumerate_sequences(&self) -> ShotpubResult<Vec<String>> {
        self.subdirectories(&path_convention::sequences_dir(&self.root))
    }

    /// Shot names of one sequence, sorted
    pub fn enumerate_shots(&self, sequence: &str) -> ShotpubResult<Vec<String>> {
        if !path_convention::is_single_segment(sequence) {
            return Err(ShotpubError::invalid_input(
                format!("sequence must be a single folder name, got {sequence:?}"),
                self.root.display().to_string(),
            ));
        }
        self.subdirectories(&path_convention::sequences_dir(&self.root).join(sequence))
    }

    /// Every recognized artifact of one asset type, ordered by file name
    pub fn list_versions(
        &self,
        sequence: &str,
        shot: &str,
        asset_type: AssetType,
    ) -> ShotpubResult<Vec<VersionEntry>> {
        path_convention::check_slot(sequence, shot)?;
        let dir = path_convention::publish_dir(&self.root, sequence, shot, asset_type);
        let listing = match self.fs.list_dir(&dir) {
            Ok(listing) => listing,
            Err(e) if e.is_not_found() => {
                log::debug!("Asset folder not found for {}: {}", asset_type.label(), dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let locator = AssetLocator::publish(sequence, shot, asset_type);
        let mut files: Vec<_> = listing.into_iter().filter(|e| !e.is_dir).collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));

        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let modified_at = match self.fs.modified(&file.path) {
                Ok(t) => t,
                // Removed between listing and stat
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e.into()),
            };
            if let Some(entry) = VersionEntry::from_path(locator.clone(), &file.path, modified_at) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Latest artifact per asset type of one shot.
    ///
    /// Types without a folder or without recognized files are absent.
    pub fn enumerate_asset_types(
        &self,
        sequence: &str,
        shot: &str,
    ) -> ShotpubResult<BTreeMap<AssetType, VersionEntry>> {
        let mut latest = BTreeMap::new();
        for asset_type in AssetType::ALL {
            if let Some(entry) = self.list_versions(sequence, shot, asset_type)?.pop() {
                latest.insert(asset_type, entry);
            }
        }
        Ok(latest)
    }

    /// Enumerate the whole tree into one immutable snapshot.
    ///
    /// Nothing is exposed until the pass completes; any hard failure discards
    /// the partial result.
    pub fn snapshot(&self) -> ShotpubResult<CatalogSnapshot> {
        let mut entries = BTreeMap::new();
        for sequence in self.enumerate_sequences()? {
            for shot in self.enumerate_shots(&sequence)? {
                for asset_type in AssetType::ALL {
                    let versions = self.list_versions(&sequence, &shot, asset_type)?;
                    if !versions.is_empty() {
                        entries.insert(AssetLocator::publish(&sequence, &shot, asset_type), versions);
                    }
                }
            }
        }
        log::debug!(
            "catalog snapshot of {}: {} populated slots",
            self.root.display(),
            entries.len()
        );
        Ok(CatalogSnapshot::new(self.root.clone(), entries))
    }

    fn subdirectories(&self, dir: &Path) -> ShotpubResult<Vec<String>> {
        match self.fs.subdirectories(dir) {
            Ok(names) => Ok(names),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests;
