//! Export format value object
//!
//! Each format maps to exactly one scene-engine commit mode; the pipeline
//! dispatches on [`ExportMode`] instead of on extension strings.

use serde::{Deserialize, Serialize};

/// Artifact file format
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
pub enum ExportFormat {
    #[serde(rename = "mb")]
    #[value(name = "mb")]
    MayaBinary,
    #[serde(rename = "ma")]
    #[value(name = "ma")]
    MayaAscii,
    #[serde(rename = "abc")]
    #[value(name = "abc")]
    Alembic,
    #[serde(rename = "fbx")]
    #[value(name = "fbx")]
    Fbx,
    #[serde(rename = "usd")]
    #[value(name = "usd")]
    Usd,
}

/// How the scene engine produces an artifact of a given format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Rename the working scene and save it whole
    SaveScene { file_type: &'static str },
    /// Write an Alembic cache job over the selection roots
    AlembicJob,
    /// Export only the selection with a translator
    ExportSelection {
        file_type: &'static str,
        options: &'static str,
    },
}

impl ExportMode {
    /// Whether the mode operates on the caller's selection roots
    pub fn requires_selection(&self) -> bool {
        !matches!(self, ExportMode::SaveScene { .. })
    }
}

impl ExportFormat {
    /// Every format recognized on disk
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::MayaBinary,
        ExportFormat::MayaAscii,
        ExportFormat::Alembic,
        ExportFormat::Fbx,
        ExportFormat::Usd,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::MayaBinary => "mb",
            ExportFormat::MayaAscii => "ma",
            ExportFormat::Alembic => "abc",
            ExportFormat::Fbx => "fbx",
            ExportFormat::Usd => "usd",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    pub fn mode(&self) -> ExportMode {
        match self {
            ExportFormat::MayaBinary => ExportMode::SaveScene {
                file_type: "mayaBinary",
            },
            ExportFormat::MayaAscii => ExportMode::SaveScene {
                file_type: "mayaAscii",
            },
            ExportFormat::Alembic => ExportMode::AlembicJob,
            ExportFormat::Fbx => ExportMode::ExportSelection {
                file_type: "FBX export",
                options: "v=0;",
            },
            ExportFormat::Usd => ExportMode::ExportSelection {
                file_type: "USD Export",
                options: ";",
            },
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
