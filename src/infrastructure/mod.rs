//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `engine/` - Headless scene engine that stages files on disk
//! - `events/` - Notification sinks (console, NDJSON, channel)

pub mod engine;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use engine::CopyEngine;
pub use events::{ChannelNotificationSink, ConsoleNotificationSink, JsonNotificationSink};
pub use fs::LocalFs;
