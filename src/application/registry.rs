//! Reference registry
//!
//! Process-wide table of artifacts bound into the session, keyed by
//! namespace, plus the modification-time baselines recorded at publish time.
//! Cloning shares the table; every access takes the lock.
//!
//! A publish baseline lives in the table only while no handle binds its
//! path. Binding folds it into the handle, and the unbound table is capped
//! at [`PUBLISHED_BASELINE_LIMIT`] entries, oldest evicted first.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::Mutex;

use crate::domain::entities::ReferenceHandle;

/// Most publish baselines kept for paths no handle binds
pub const PUBLISHED_BASELINE_LIMIT: usize = 256;

#[derive(Debug, Default)]
struct RegistryTable {
    handles: BTreeMap<String, ReferenceHandle>,
    baselines: HashMap<PathBuf, SystemTime>,
}

/// Consistent copy of the registry taken under one lock
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    pub handles: Vec<ReferenceHandle>,
    pub baselines: HashMap<PathBuf, SystemTime>,
}

/// Shared table of reference handles
#[derive(Debug, Clone, Default)]
pub struct ReferenceRegistry {
    inner: Arc<Mutex<RegistryTable>>,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the handle stored under its namespace.
    ///
    /// Returns the replaced handle, if any.
    pub fn register(&self, mut handle: ReferenceHandle) -> Option<ReferenceHandle> {
        let mut table = self.inner.lock();
        if let Some(published) = table.baselines.remove(&handle.resolved_path) {
            handle.baseline = Some(later(handle.baseline, published));
        }
        log::debug!(
            "register {} -> {}",
            handle.namespace,
            handle.resolved_path.display()
        );
        table.handles.insert(handle.namespace.clone(), handle)
    }

    pub fn get(&self, namespace: &str) -> Option<ReferenceHandle> {
        self.inner.lock().handles.get(namespace).cloned()
    }

    /// All handles ordered by namespace
    pub fn all(&self) -> Vec<ReferenceHandle> {
        self.inner.lock().handles.values().cloned().collect()
    }

    /// Record the modification time of a freshly committed artifact.
    ///
    /// Handles already bound to `path` take the baseline directly. Later
    /// baselines for the same path only move forward.
    pub fn record_baseline(&self, path: impl Into<PathBuf>, modified_at: SystemTime) {
        let path = path.into();
        let mut table = self.inner.lock();

        let mut bound = false;
        for handle in table.handles.values_mut().filter(|h| h.resolved_path == path) {
            handle.baseline = Some(later(handle.baseline, modified_at));
            bound = true;
        }
        if bound {
            return;
        }

        let slot = table.baselines.entry(path).or_insert(modified_at);
        if modified_at > *slot {
            *slot = modified_at;
        }
        if table.baselines.len() > PUBLISHED_BASELINE_LIMIT {
            evict_oldest(&mut table.baselines);
        }
    }

    /// Effective baseline of `path`, bound or not
    pub fn baseline(&self, path: &Path) -> Option<SystemTime> {
        let table = self.inner.lock();
        let bound = table
            .handles
            .values()
            .filter(|h| h.resolved_path == path)
            .filter_map(|h| h.baseline)
            .max();
        match (bound, table.baselines.get(path).copied()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let table = self.inner.lock();
        RegistrySnapshot {
            handles: table.handles.values().cloned().collect(),
            baselines: table.baselines.clone(),
        }
    }

    /// Drop every handle and baseline (project change)
    pub fn clear(&self) {
        let mut table = self.inner.lock();
        table.handles.clear();
        table.baselines.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().handles.is_empty()
    }
}

fn later(current: Option<SystemTime>, candidate: SystemTime) -> SystemTime {
    current.map_or(candidate, |c| c.max(candidate))
}

fn evict_oldest(baselines: &mut HashMap<PathBuf, SystemTime>) {
    let oldest = baselines
        .iter()
        .min_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(path, _)| path.clone());
    if let Some(path) = oldest {
        log::debug!("dropping publish baseline for {}", path.display());
        baselines.remove(&path);
    }
}
