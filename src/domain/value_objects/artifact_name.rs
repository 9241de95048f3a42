//! Artifact file name - `{base_tag}_v{version:03}.{extension}`
//!
//! The file name is the versioning ledger, so formatting must stay
//! byte-compatible with existing trees.

use std::sync::OnceLock;

use regex::Regex;

use super::ExportFormat;

/// Structured artifact file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName {
    pub base_tag: String,
    pub version: u32,
    pub format: ExportFormat,
}

fn artifact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.+)_v(\d+)\.([A-Za-z]+)$").expect("artifact pattern is valid")
    })
}

impl ArtifactName {
    pub fn new(base_tag: impl Into<String>, version: u32, format: ExportFormat) -> Self {
        Self {
            base_tag: base_tag.into(),
            version,
            format,
        }
    }

    /// Parse a file name produced by [`ArtifactName::file_name`].
    ///
    /// Returns `None` for unknown extensions and for version `0`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = artifact_pattern().captures(file_name)?;
        let format = ExportFormat::from_extension(&caps[3])?;
        let version: u32 = caps[2].parse().ok()?;
        if version == 0 {
            return None;
        }
        Some(Self::new(&caps[1], version, format))
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_v{:03}.{}",
            self.base_tag,
            self.version,
            self.format.extension()
        )
    }
}

impl std::fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name())
    }
}
