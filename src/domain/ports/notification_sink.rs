//! Notification Sink Port
//!
//! Receives "update available" notices from the update watcher.

/// Fire-and-forget receiver of update notifications.
///
/// Called from the watcher thread.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, asset_label: &str);
}

impl<F> NotificationSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, asset_label: &str) {
        self(asset_label)
    }
}
