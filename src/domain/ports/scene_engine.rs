//! Scene Engine Port
//!
//! The DCC host that actually reads and writes scene files. Calls are
//! synchronous, not reentrant and cannot be cancelled.

use std::path::Path;

use crate::domain::value_objects::ExportFormat;

/// Opaque failure reported by the scene engine, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError(pub String);

impl EngineError {
    pub fn new(diagnostic: impl Into<String>) -> Self {
        Self(diagnostic.into())
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for EngineError {}

/// Parameters forwarded with every commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOptions {
    /// Selection roots for formats that export a subset of the scene
    pub roots: Vec<String>,
    /// Inclusive frame range for cache formats
    pub frame_range: (i32, i32),
    /// Alembic data format (e.g. `ogawa`)
    pub alembic_data_format: String,
}

impl Default for CommitOptions {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            frame_range: (1, 120),
            alembic_data_format: "ogawa".to_string(),
        }
    }
}

/// Trait implemented by scene engine bindings.
///
/// Implementations can be:
/// - a live DCC binding
/// - `CopyEngine`: stages files on disk for headless use
pub trait SceneEngine {
    /// Write the current scene (or its selection) to `path` in `format`.
    fn commit_artifact(
        &self,
        path: &Path,
        format: ExportFormat,
        options: &CommitOptions,
    ) -> Result<(), EngineError>;

    /// Bind `path` into the scene as a reference under `namespace`.
    fn load_artifact_as_reference(&self, path: &Path, namespace: &str) -> Result<(), EngineError>;

    /// Open `path`, replacing the current scene.
    fn load_artifact_replacing_scene(&self, path: &Path) -> Result<(), EngineError>;
}
