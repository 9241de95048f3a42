//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod notification_sink;
pub mod scene_engine;

pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use notification_sink::NotificationSink;
pub use scene_engine::{CommitOptions, EngineError, SceneEngine};
