//! Update Watcher
//!
//! Polls the modification times of bound artifacts and emits one
//! "update available" notification per artifact that moved past its
//! baseline.
//!
//! ## Architecture
//!
//! - `UpdateWatcher` - Idle/Polling state machine running ticks on a thread
//! - `WatchState` - Last observed timestamps, owned by the watcher only
//!
//! Detection is level-triggered on timestamps: any write, even one that
//! leaves the content unchanged, produces a notification.

mod state;
mod watcher;


pub use state::{WatchKey, WatchState};
pub use watcher::{UpdateWatcher, WatcherStatus};
