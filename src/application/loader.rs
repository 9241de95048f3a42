//! Load the latest artifact of every asset type of a shot

use std::path::PathBuf;

use serde::Serialize;

use crate::application::catalog::AssetCatalog;
use crate::application::registry::ReferenceRegistry;
use crate::domain::entities::ReferenceHandle;
use crate::domain::ports::{FileSystem, SceneEngine};
use crate::error::ShotpubResult;

/// A per-asset load that the engine rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub namespace: String,
    pub path: PathBuf,
    pub diagnostic: String,
}

/// Outcome of [`LatestLoader::load_latest`]
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Handles registered, ordered by asset type
    pub loaded: Vec<ReferenceHandle>,
    pub failed: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn namespaces(&self) -> Vec<&str> {
        self.loaded.iter().map(|h| h.namespace.as_str()).collect()
    }
}

pub struct LatestLoader<'a, F: FileSystem, E: SceneEngine + ?Sized> {
    catalog: &'a AssetCatalog<F>,
    engine: &'a E,
    registry: &'a ReferenceRegistry,
}

impl<'a, F: FileSystem, E: SceneEngine + ?Sized> LatestLoader<'a, F, E> {
    pub fn new(catalog: &'a AssetCatalog<F>, engine: &'a E, registry: &'a ReferenceRegistry) -> Self {
        Self {
            catalog,
            engine,
            registry,
        }
    }

    /// Reference the newest artifact of each populated asset type.
    ///
    /// Engine failures are collected and the remaining types still load;
    /// only catalog errors abort.
    pub fn load_latest(&self, sequence: &str, shot: &str) -> ShotpubResult<LoadReport> {
        let mut report = LoadReport::default();

        for (_, entry) in self.catalog.enumerate_asset_types(sequence, shot)? {
            let namespace = entry.locator.namespace();
            if let Err(e) = self.engine.load_artifact_as_reference(&entry.path, &namespace) {
                log::warn!(
                    "could not load {} as {}: {}",
                    entry.path.display(),
                    namespace,
                    e
                );
                report.failed.push(LoadFailure {
                    namespace,
                    path: entry.path,
                    diagnostic: e.to_string(),
                });
                continue;
            }

            log::info!("loaded {} as {}", entry.label(), namespace);
            let handle = ReferenceHandle::new(namespace, entry.locator, entry.path)
                .with_baseline(entry.modified_at);
            self.registry.register(handle.clone());
            report.loaded.push(handle);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{touch, EngineCall, RecordingEngine};
    use crate::domain::services::path_convention;
    use crate::domain::value_objects::AssetType;
    use crate::infrastructure::LocalFs;
    use tempfile::tempdir;

    #[test]
    fn loads_latest_of_each_populated_type() {
        let dir = tempdir().unwrap();
        let set = path_convention::publish_dir(dir.path(), "sq01", "sh010", AssetType::Set);
        let anim = path_convention::publish_dir(dir.path(), "sq01", "sh010", AssetType::Animation);
        touch(&set.join("sq01_dress_sh010_v001.mb"));
        touch(&set.join("sq01_dress_sh010_v002.mb"));
        touch(&anim.join("sh010_walk_animation_v007.abc"));

        let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
        let engine = RecordingEngine::new();
        let registry = ReferenceRegistry::new();
        let report = LatestLoader::new(&catalog, &engine, &registry)
            .load_latest("sq01", "sh010")
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.namespaces(), vec!["sq01_sh010_set", "sq01_sh010_animation"]);
        assert_eq!(
            engine.calls()[0],
            EngineCall::Reference(set.join("sq01_dress_sh010_v002.mb"), "sq01_sh010_set".to_string())
        );
        let handle = registry.get("sq01_sh010_animation").unwrap();
        assert!(handle.baseline.is_some());
        assert_eq!(handle.artifact_label(), "sh010_walk_animation_v007.abc");
    }

    #[test]
    fn engine_failure_is_reported_and_loop_continues() {
        let dir = tempdir().unwrap();
        let set = path_convention::publish_dir(dir.path(), "sq01", "sh010", AssetType::Set);
        let prop = path_convention::publish_dir(dir.path(), "sq01", "sh010", AssetType::Prop);
        let broken = set.join("sq01_dress_sh010_v001.mb");
        touch(&broken);
        touch(&prop.join("sh010_crate_prop_v001.abc"));

        let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
        let engine = RecordingEngine::failing_load(&broken);
        let registry = ReferenceRegistry::new();
        let report = LatestLoader::new(&catalog, &engine, &registry)
            .load_latest("sq01", "sh010")
            .unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].namespace, "sq01_sh010_set");
        assert_eq!(report.failed[0].path, broken);
        assert_eq!(report.namespaces(), vec!["sq01_sh010_prop"]);
        assert!(registry.get("sq01_sh010_set").is_none());
    }

    #[test]
    fn escaping_slot_loads_nothing() {
        let dir = tempdir().unwrap();
        let catalog = AssetCatalog::new(LocalFs::new(), dir.path().join("project"));
        let engine = RecordingEngine::new();
        let registry = ReferenceRegistry::new();

        let err = LatestLoader::new(&catalog, &engine, &registry)
            .load_latest("../..", "sh010")
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
        assert!(engine.calls().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_shot_loads_nothing() {
        let dir = tempdir().unwrap();
        let catalog = AssetCatalog::new(LocalFs::new(), dir.path());
        let engine = RecordingEngine::new();
        let registry = ReferenceRegistry::new();

        let report = LatestLoader::new(&catalog, &engine, &registry)
            .load_latest("sq99", "sh999")
            .unwrap();
        assert!(report.loaded.is_empty());
        assert!(registry.is_empty());
    }
}
