//! Update watcher implementation

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;

use crate::application::registry::ReferenceRegistry;
use crate::domain::ports::{FileSystem, NotificationSink};

use super::state::{WatchKey, WatchState};

/// Observable watcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherStatus {
    Idle,
    Polling,
}

struct PollingTask {
    stop: Sender<()>,
    thread: JoinHandle<()>,
    interval: Duration,
}

/// Periodic poller comparing artifact timestamps against their baselines.
///
/// `start` while already polling is a no-op and keeps the running interval.
/// `stop` joins the polling thread, so no notification fires after it
/// returns. Do not call `stop` from inside the notification sink.
pub struct UpdateWatcher<F: FileSystem + Clone + 'static> {
    fs: F,
    registry: ReferenceRegistry,
    sink: Arc<dyn NotificationSink>,
    state: Arc<Mutex<WatchState>>,
    task: Option<PollingTask>,
}

struct WatchTarget {
    key: WatchKey,
    path: PathBuf,
    label: String,
    baseline: Option<SystemTime>,
}

impl<F: FileSystem + Clone + 'static> UpdateWatcher<F> {
    pub fn new(fs: F, registry: ReferenceRegistry, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            fs,
            registry,
            sink,
            state: Arc::new(Mutex::new(WatchState::new())),
            task: None,
        }
    }

    pub fn status(&self) -> WatcherStatus {
        if self.task.is_some() {
            WatcherStatus::Polling
        } else {
            WatcherStatus::Idle
        }
    }

    /// Interval of the running task
    pub fn interval(&self) -> Option<Duration> {
        self.task.as_ref().map(|t| t.interval)
    }

    /// Idle -> Polling. Returns `false` if already polling.
    pub fn start(&mut self, interval: Duration) -> bool {
        if self.task.is_some() {
            log::debug!("update watcher already polling; start ignored");
            return false;
        }

        let (stop, stop_rx) = mpsc::channel::<()>();
        let fs = self.fs.clone();
        let registry = self.registry.clone();
        let sink = Arc::clone(&self.sink);
        let state = Arc::clone(&self.state);

        let thread = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    poll(&fs, &registry, sink.as_ref(), &state);
                }
                // Stop requested or watcher dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        log::info!("update watcher polling every {} ms", interval.as_millis());
        self.task = Some(PollingTask {
            stop,
            thread,
            interval,
        });
        true
    }

    /// Polling -> Idle. Returns once the polling thread has exited.
    pub fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        let _ = task.stop.send(());
        if task.thread.join().is_err() {
            log::warn!("update watcher thread panicked");
        }
        log::info!("update watcher stopped");
    }

    /// Run one tick on the calling thread; returns the labels notified
    pub fn poll_once(&self) -> Vec<String> {
        poll(&self.fs, &self.registry, self.sink.as_ref(), &self.state)
    }

    /// Forget every observed timestamp (project change)
    pub fn reset(&mut self) {
        self.state.lock().clear();
    }
}

impl<F: FileSystem + Clone + 'static> Drop for UpdateWatcher<F> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn poll<F: FileSystem>(
    fs: &F,
    registry: &ReferenceRegistry,
    sink: &dyn NotificationSink,
    state: &Mutex<WatchState>,
) -> Vec<String> {
    let targets = collect_targets(registry);
    let mut state = state.lock();
    let mut notified = Vec::new();

    for target in targets {
        let current = match fs.modified(&target.path) {
            Ok(t) => t,
            Err(e) if e.is_not_found() => continue,
            Err(e) => {
                log::debug!("cannot stat {}: {}", target.path.display(), e);
                continue;
            }
        };

        let reference = match (state.observed(&target.key, &target.path), target.baseline) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };

        match reference {
            None => state.record(target.key, &target.path, current),
            Some(seen) if current > seen => {
                state.record(target.key, &target.path, current);
                log::info!("An update for {} is available.", target.label);
                sink.notify(&target.label);
                notified.push(target.label);
            }
            Some(_) => {}
        }
    }

    notified
}

/// Handles first, then published paths no handle points at
fn collect_targets(registry: &ReferenceRegistry) -> Vec<WatchTarget> {
    let snapshot = registry.snapshot();
    let mut bound: HashSet<PathBuf> = HashSet::new();
    let mut targets = Vec::new();

    for handle in &snapshot.handles {
        let published = snapshot.baselines.get(&handle.resolved_path).copied();
        let baseline = match (handle.baseline, published) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        bound.insert(handle.resolved_path.clone());
        targets.push(WatchTarget {
            key: WatchKey::Handle(handle.namespace.clone()),
            path: handle.resolved_path.clone(),
            label: handle.artifact_label(),
            baseline,
        });
    }

    let mut published: Vec<_> = snapshot
        .baselines
        .iter()
        .filter(|(path, _)| !bound.contains(*path))
        .collect();
    published.sort();
    for (path, baseline) in published {
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        targets.push(WatchTarget {
            key: WatchKey::Published(path.clone()),
            path: path.clone(),
            label,
            baseline: Some(*baseline),
        });
    }

    targets
}
