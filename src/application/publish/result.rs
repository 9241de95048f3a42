//! Publish Result

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::ScanWarning;
use crate::domain::value_objects::ExportFormat;

/// One committed artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedArtifact {
    pub format: ExportFormat,
    pub version: u32,
    pub path: PathBuf,
}

/// Result of a fully successful publish
#[derive(Debug, Clone, Default)]
pub struct PublishResult {
    /// Directory the artifacts were written to
    pub directory: PathBuf,
    /// Tag prefixing every artifact name
    pub base_tag: String,
    /// Artifacts in commit order
    pub artifacts: Vec<PublishedArtifact>,
    /// Directories that could not be scanned (versions restarted at 1)
    pub warnings: Vec<ScanWarning>,
}

impl PublishResult {
    pub fn paths(&self) -> Vec<PathBuf> {
        self.artifacts.iter().map(|a| a.path.clone()).collect()
    }

    /// Human-readable summary line
    pub fn summary(&self) -> String {
        format!("Files saved in: {}", self.directory.display())
    }
}
