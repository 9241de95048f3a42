//! Watch state - last observed timestamps

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What one watch slot tracks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WatchKey {
    /// A registered reference handle
    Handle(String),
    /// A published artifact not bound under any namespace
    Published(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observation {
    observed: SystemTime,
}

/// Timestamps last seen per watch slot.
///
/// Only the watcher writes this; other components influence detection
/// solely through the baselines they put in the registry.
#[derive(Debug, Default)]
pub struct WatchState {
    slots: HashMap<WatchKey, (PathBuf, Observation)>,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last timestamp observed for `key` while it pointed at `path`
    pub fn observed(&self, key: &WatchKey, path: &Path) -> Option<SystemTime> {
        self.slots
            .get(key)
            .filter(|(p, _)| p == path)
            .map(|(_, o)| o.observed)
    }

    pub fn record(&mut self, key: WatchKey, path: &Path, observed: SystemTime) {
        self.slots
            .insert(key, (path.to_path_buf(), Observation { observed }));
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
