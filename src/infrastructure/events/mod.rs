//! Notification Sink Implementations
//!
//! Provides concrete implementations of NotificationSink:
//! - ConsoleNotificationSink: human-readable lines
//! - JsonNotificationSink: NDJSON output for CI/automation
//! - ChannelNotificationSink: forwards labels to an in-process receiver

mod channel;
mod console;
mod json;

pub use channel::ChannelNotificationSink;
pub use console::ConsoleNotificationSink;
pub use json::JsonNotificationSink;
