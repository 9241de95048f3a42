//! Rollback to a previously published version
//!
//! Labels are file names exactly as listed by
//! [`AssetCatalog::list_versions`](crate::application::catalog::AssetCatalog::list_versions),
//! not bare version numbers.

use std::path::Path;

use crate::application::registry::ReferenceRegistry;
use crate::domain::entities::ReferenceHandle;
use crate::domain::ports::{FileSystem, SceneEngine};
use crate::domain::services::path_convention;
use crate::domain::value_objects::{AssetLocator, AssetType};
use crate::error::{ShotpubError, ShotpubResult};

/// How the historical artifact is bound into the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollbackMode {
    /// Load alongside the current scene under the `_rollback` namespace
    #[default]
    Reference,
    /// Open the artifact in place of the current scene
    ReplaceScene,
}

#[derive(Debug, Clone)]
pub struct RollbackRequest {
    pub sequence: String,
    pub shot: String,
    /// `None` when no asset type has been selected yet
    pub asset_type: Option<AssetType>,
    pub version_label: String,
    pub mode: RollbackMode,
}

impl RollbackRequest {
    pub fn new(
        sequence: impl Into<String>,
        shot: impl Into<String>,
        asset_type: Option<AssetType>,
        version_label: impl Into<String>,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            shot: shot.into(),
            asset_type,
            version_label: version_label.into(),
            mode: RollbackMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: RollbackMode) -> Self {
        self.mode = mode;
        self
    }
}

pub struct RollbackService<'a, F: FileSystem + ?Sized, E: SceneEngine + ?Sized> {
    fs: &'a F,
    engine: &'a E,
    registry: &'a ReferenceRegistry,
    root: &'a Path,
}

impl<'a, F: FileSystem + ?Sized, E: SceneEngine + ?Sized> RollbackService<'a, F, E> {
    pub fn new(fs: &'a F, engine: &'a E, registry: &'a ReferenceRegistry, root: &'a Path) -> Self {
        Self {
            fs,
            engine,
            registry,
            root,
        }
    }

    /// Bind the labelled historical artifact and register its handle.
    ///
    /// Invalid requests are reported as `InvalidInput` before the engine is
    /// touched; a missing artifact is `NotFound`.
    pub fn rollback(&self, request: &RollbackRequest) -> ShotpubResult<ReferenceHandle> {
        path_convention::check_slot(&request.sequence, &request.shot)?;
        let context = format!("{}/{}", request.sequence, request.shot);
        let Some(asset_type) = request.asset_type else {
            return Err(ShotpubError::invalid_input(
                "please select an asset type",
                context,
            ));
        };
        let label = request.version_label.trim();
        if label.is_empty() {
            return Err(ShotpubError::invalid_input(
                "please select a version to roll back to",
                context,
            ));
        }
        if !path_convention::is_single_segment(label) {
            return Err(ShotpubError::invalid_input(
                format!("version label must be a file name, got {label:?}"),
                context,
            ));
        }

        let locator = AssetLocator::publish(&request.sequence, &request.shot, asset_type);
        let path = path_convention::publish_dir(self.root, &locator.sequence, &locator.shot, asset_type)
            .join(label);
        if !self.fs.exists(&path) {
            return Err(ShotpubError::NotFound { path });
        }

        let namespace = locator.rollback_namespace();
        let loaded = match request.mode {
            RollbackMode::Reference => self.engine.load_artifact_as_reference(&path, &namespace),
            RollbackMode::ReplaceScene => self.engine.load_artifact_replacing_scene(&path),
        };
        loaded.map_err(|e| ShotpubError::EngineFailure {
            action: "load",
            path: path.clone(),
            diagnostic: e.to_string(),
        })?;
        log::info!("{} rolled back to {}", locator, label);

        let mut handle = ReferenceHandle::new(namespace, locator, &path);
        match self.fs.modified(&path) {
            Ok(mtime) => handle = handle.with_baseline(mtime),
            Err(e) => log::warn!("no baseline for {}: {}", path.display(), e),
        }
        self.registry.register(handle.clone());
        Ok(handle)
    }
}
