//! Project session
//!
//! One `Session` per selected project root. It owns the catalog, the latest
//! snapshot, the reference registry and the update watcher; publish,
//! rollback and load run through `&mut self` so they stay on the control
//! thread while the watcher polls in the background.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::application::catalog::AssetCatalog;
use crate::application::loader::{LatestLoader, LoadReport};
use crate::application::publish::{PublishPipeline, PublishRequest, PublishResult};
use crate::application::registry::ReferenceRegistry;
use crate::application::rollback::{RollbackRequest, RollbackService};
use crate::application::watch::{UpdateWatcher, WatcherStatus};
use crate::config::Config;
use crate::domain::entities::{CatalogSnapshot, ReferenceHandle};
use crate::domain::ports::{FileSystem, NotificationSink, SceneEngine};
use crate::error::{ShotpubError, ShotpubResult};

pub struct Session<F: FileSystem + Clone + 'static, E: SceneEngine> {
    root: PathBuf,
    fs: F,
    engine: E,
    config: Config,
    catalog: AssetCatalog<F>,
    snapshot: Option<CatalogSnapshot>,
    registry: ReferenceRegistry,
    watcher: UpdateWatcher<F>,
}

impl<F: FileSystem + Clone + 'static, E: SceneEngine> Session<F, E> {
    /// Open a session on `root`, which must be an existing directory.
    pub fn open(
        root: impl AsRef<Path>,
        fs: F,
        engine: E,
        sink: Arc<dyn NotificationSink>,
        config: Config,
    ) -> ShotpubResult<Self> {
        let root = validate_root(&fs, root.as_ref())?;
        let registry = ReferenceRegistry::new();
        let watcher = UpdateWatcher::new(fs.clone(), registry.clone(), sink);
        log::info!("project root: {}", root.display());

        Ok(Self {
            catalog: AssetCatalog::new(fs.clone(), root.clone()),
            root,
            fs,
            engine,
            config,
            snapshot: None,
            registry,
            watcher,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &AssetCatalog<F> {
        &self.catalog
    }

    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Last snapshot taken with [`Session::refresh_catalog`]
    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        self.snapshot.as_ref()
    }

    /// Re-enumerate the project tree.
    ///
    /// The previous snapshot stays in place if enumeration fails.
    pub fn refresh_catalog(&mut self) -> ShotpubResult<&CatalogSnapshot> {
        let snapshot = self.catalog.snapshot()?;
        Ok(&*self.snapshot.insert(snapshot))
    }

    pub fn publish(&mut self, request: &PublishRequest) -> ShotpubResult<PublishResult> {
        PublishPipeline::new(
            &self.fs,
            &self.engine,
            &self.registry,
            &self.root,
            &self.config.export,
        )
        .publish(request)
    }

    pub fn rollback(&mut self, request: &RollbackRequest) -> ShotpubResult<ReferenceHandle> {
        RollbackService::new(&self.fs, &self.engine, &self.registry, &self.root).rollback(request)
    }

    pub fn load_latest(&mut self, sequence: &str, shot: &str) -> ShotpubResult<LoadReport> {
        LatestLoader::new(&self.catalog, &self.engine, &self.registry).load_latest(sequence, shot)
    }

    /// Start polling at the configured interval
    pub fn start_watching(&mut self) -> bool {
        let interval = self.config.watch.interval();
        self.start_watching_every(interval)
    }

    pub fn start_watching_every(&mut self, interval: Duration) -> bool {
        self.watcher.start(interval)
    }

    pub fn stop_watching(&mut self) {
        self.watcher.stop();
    }

    pub fn watcher_status(&self) -> WatcherStatus {
        self.watcher.status()
    }

    /// One synchronous watcher tick; returns the labels notified
    pub fn poll_once(&self) -> Vec<String> {
        self.watcher.poll_once()
    }

    /// Switch to another project root.
    ///
    /// The new root is validated first; on error the current project is
    /// left untouched. Otherwise polling stops and every handle, baseline
    /// and observed timestamp of the old project is dropped.
    pub fn change_project(&mut self, root: impl AsRef<Path>) -> ShotpubResult<()> {
        let root = validate_root(&self.fs, root.as_ref())?;

        self.watcher.stop();
        self.watcher.reset();
        self.registry.clear();
        self.snapshot = None;
        self.catalog = AssetCatalog::new(self.fs.clone(), root.clone());
        log::info!(
            "project root changed: {} -> {}",
            self.root.display(),
            root.display()
        );
        self.root = root;
        Ok(())
    }
}

fn validate_root<F: FileSystem>(fs: &F, root: &Path) -> ShotpubResult<PathBuf> {
    if root.as_os_str().is_empty() {
        return Err(ShotpubError::invalid_input(
            "project root is empty",
            "select a project directory",
        ));
    }
    let root = std::path::absolute(root).map_err(|e| ShotpubError::io(root, e))?;
    if !fs.exists(&root) {
        return Err(ShotpubError::NotFound { path: root });
    }
    // Listing doubles as the is-a-directory check
    fs.list_dir(&root)?;
    Ok(root)
}
