//! Console Notification Sink

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::NotificationSink;

/// Prints one line per update notification
pub struct ConsoleNotificationSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotificationSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl NotificationSink for ConsoleNotificationSink {
    fn notify(&self, asset_label: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "An update for {} is available.", asset_label);
            let _ = writer.flush();
        }
    }
}
