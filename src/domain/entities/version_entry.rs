//! Version entry - one artifact found on disk

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::value_objects::{ArtifactName, AssetLocator, ExportFormat};

/// One resolved artifact on disk.
///
/// Created by scanning; never mutated, only superseded by a newer scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub locator: AssetLocator,
    /// Tag portion of the file name, or the file stem if it does not follow
    /// the versioned naming convention
    pub base_tag: String,
    pub format: ExportFormat,
    /// `None` for recognized files without a `_vNNN` suffix
    pub version: Option<u32>,
    pub path: PathBuf,
    pub modified_at: SystemTime,
}

impl VersionEntry {
    /// Build an entry from a file path, or `None` if the extension is not a
    /// recognized artifact format.
    pub fn from_path(locator: AssetLocator, path: &Path, modified_at: SystemTime) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        if let Some(name) = ArtifactName::parse(file_name) {
            return Some(Self {
                locator,
                base_tag: name.base_tag,
                format: name.format,
                version: Some(name.version),
                path: path.to_path_buf(),
                modified_at,
            });
        }

        let format = ExportFormat::from_extension(path.extension()?.to_str()?)?;
        let stem = path.file_stem()?.to_str()?;
        Some(Self {
            locator,
            base_tag: stem.to_string(),
            format,
            version: None,
            path: path.to_path_buf(),
            modified_at,
        })
    }

    /// File name, which doubles as the rollback label
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
