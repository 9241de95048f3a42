//! Copy Engine
//!
//! Headless `SceneEngine` used by the CLI: a "commit" copies a staged scene
//! file to the artifact path, and loads only verify the artifact exists.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::{CommitOptions, EngineError, SceneEngine};
use crate::domain::value_objects::{ExportFormat, ExportMode};

/// Scene engine that stages files on disk
#[derive(Debug, Clone, Default)]
pub struct CopyEngine {
    source: Option<PathBuf>,
}

impl CopyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine committing copies of `source`
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }

    fn stage(source: &Path, target: &Path) -> io::Result<()> {
        let parent = target
            .parent()
            .ok_or_else(|| io::Error::other("artifact path has no parent directory"))?;
        let mut reader = std::fs::File::open(source)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        io::copy(&mut reader, tmp.as_file_mut())?;
        tmp.as_file().sync_all()?;
        tmp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SceneEngine for CopyEngine {
    fn commit_artifact(
        &self,
        path: &Path,
        format: ExportFormat,
        options: &CommitOptions,
    ) -> Result<(), EngineError> {
        let source = self
            .source
            .as_deref()
            .ok_or_else(|| EngineError::new("no staged scene to commit"))?;

        match format.mode() {
            ExportMode::SaveScene { file_type } => {
                log::debug!("saving {} as {}", source.display(), file_type);
            }
            ExportMode::AlembicJob => {
                log::debug!(
                    "alembic job: frames {}-{} ({}) roots [{}]",
                    options.frame_range.0,
                    options.frame_range.1,
                    options.alembic_data_format,
                    options.roots.join(", ")
                );
            }
            ExportMode::ExportSelection { file_type, options: translator } => {
                log::debug!(
                    "export selection as {} ({}) roots [{}]",
                    file_type,
                    translator,
                    options.roots.join(", ")
                );
            }
        }

        Self::stage(source, path).map_err(|e| {
            EngineError::new(format!("copy from {} failed: {}", source.display(), e))
        })?;
        log::info!("{} file saved at: {}", format.extension().to_uppercase(), path.display());
        Ok(())
    }

    fn load_artifact_as_reference(&self, path: &Path, namespace: &str) -> Result<(), EngineError> {
        if !path.is_file() {
            return Err(EngineError::new(format!("{} is not a file", path.display())));
        }
        log::info!("Loaded {} with namespace {}", path.display(), namespace);
        Ok(())
    }

    fn load_artifact_replacing_scene(&self, path: &Path) -> Result<(), EngineError> {
        if !path.is_file() {
            return Err(EngineError::new(format!("{} is not a file", path.display())));
        }
        log::info!("Opened {}", path.display());
        Ok(())
    }
}
