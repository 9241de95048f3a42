//! JSON Notification Sink
//!
//! Outputs update notifications as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::ports::NotificationSink;

/// Notification sink that outputs NDJSON events
pub struct JsonNotificationSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonNotificationSink {
    /// Create a new JSON sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl NotificationSink for JsonNotificationSink {
    fn notify(&self, asset_label: &str) {
        let event = serde_json::json!({
            "event": "update_available",
            "command": "watch",
            "artifact": asset_label,
            "at": Utc::now().to_rfc3339(),
        });
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}
