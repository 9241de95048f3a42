//! Shared test doubles for application use cases

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::{CommitOptions, EngineError, SceneEngine};
use crate::domain::value_objects::ExportFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Commit(PathBuf, ExportFormat, Vec<String>),
    Reference(PathBuf, String),
    Open(PathBuf),
}

/// Engine that writes placeholder files and records every call
#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<EngineCall>>,
    fail_format: Option<ExportFormat>,
    fail_load: Option<PathBuf>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(format: ExportFormat) -> Self {
        Self {
            fail_format: Some(format),
            ..Self::default()
        }
    }

    pub fn failing_load(path: impl Into<PathBuf>) -> Self {
        Self {
            fail_load: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_load(&self, path: &Path) -> Result<(), EngineError> {
        if self.fail_load.as_deref() == Some(path) {
            return Err(EngineError::new("reference node is locked"));
        }
        Ok(())
    }
}

impl SceneEngine for RecordingEngine {
    fn commit_artifact(
        &self,
        path: &Path,
        format: ExportFormat,
        options: &CommitOptions,
    ) -> Result<(), EngineError> {
        if self.fail_format == Some(format) {
            return Err(EngineError::new(format!("{} translator not loaded", format)));
        }
        std::fs::write(path, format.extension()).map_err(|e| EngineError::new(e.to_string()))?;
        self.calls.lock().unwrap().push(EngineCall::Commit(
            path.to_path_buf(),
            format,
            options.roots.clone(),
        ));
        Ok(())
    }

    fn load_artifact_as_reference(&self, path: &Path, namespace: &str) -> Result<(), EngineError> {
        self.check_load(path)?;
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::Reference(path.to_path_buf(), namespace.to_string()));
        Ok(())
    }

    fn load_artifact_replacing_scene(&self, path: &Path) -> Result<(), EngineError> {
        self.check_load(path)?;
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::Open(path.to_path_buf()));
        Ok(())
    }
}

/// Create `path` (and parents) with placeholder content
pub fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "x").unwrap();
}
