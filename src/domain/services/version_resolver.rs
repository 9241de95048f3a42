//! Version resolver
//!
//! Scans one directory for `{base_tag}_vNNN.{ext}` artifacts. Nothing is
//! cached: every answer is recomputed from the current listing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{ArtifactName, ExportFormat};

/// A directory that could not be read, reported instead of failing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub directory: PathBuf,
    pub message: String,
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not scan {}: {}",
            self.directory.display(),
            self.message
        )
    }
}

/// Versions found for one `(base_tag, format)` pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionScan {
    pub versions: BTreeSet<u32>,
    pub warning: Option<ScanWarning>,
}

impl VersionScan {
    pub fn latest(&self) -> Option<u32> {
        self.versions.last().copied()
    }

    /// `latest + 1`, or `1` for an empty scan.
    ///
    /// `None` once the counter is exhausted.
    pub fn next(&self) -> Option<u32> {
        match self.latest() {
            Some(v) => v.checked_add(1),
            None => Some(1),
        }
    }
}

/// Resolves latest/next versions from a directory listing
pub struct VersionResolver<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> VersionResolver<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Collect every version of `base_tag` in `format` under `directory`.
    ///
    /// A file matches only if its whole name is `{base_tag}_v{digits}.{ext}`,
    /// so `{base_tag}Extra_v001.ext` never counts toward `base_tag`.
    /// A missing directory is an empty scan; any other listing failure is an
    /// empty scan carrying a warning.
    pub fn scan(&self, directory: &Path, base_tag: &str, format: ExportFormat) -> VersionScan {
        let entries = match self.fs.list_dir(directory) {
            Ok(entries) => entries,
            Err(e) if e.is_not_found() => {
                log::debug!("version scan: {} does not exist yet", directory.display());
                return VersionScan::default();
            }
            Err(e) => {
                log::warn!("version scan of {} failed: {}", directory.display(), e);
                return VersionScan {
                    versions: BTreeSet::new(),
                    warning: Some(ScanWarning {
                        directory: directory.to_path_buf(),
                        message: e.to_string(),
                    }),
                };
            }
        };

        let versions = entries
            .iter()
            .filter(|e| !e.is_dir)
            .filter_map(|e| ArtifactName::parse(&e.name))
            .filter(|name| name.base_tag == base_tag && name.format == format)
            .map(|name| name.version)
            .collect();

        VersionScan {
            versions,
            warning: None,
        }
    }

    pub fn latest_version(&self, directory: &Path, base_tag: &str, format: ExportFormat) -> Option<u32> {
        self.scan(directory, base_tag, format).latest()
    }

    pub fn next_version(&self, directory: &Path, base_tag: &str, format: ExportFormat) -> Option<u32> {
        self.scan(directory, base_tag, format).next()
    }
}

#[cfg(test)]
mod tests;
