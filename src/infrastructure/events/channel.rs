//! Channel Notification Sink
//!
//! Forwards labels to an `mpsc` receiver so a host UI can surface them on
//! its own thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use crate::domain::ports::NotificationSink;

pub struct ChannelNotificationSink {
    sender: Mutex<Sender<String>>,
}

impl ChannelNotificationSink {
    /// Sink plus the receiving end of its channel
    pub fn new() -> (Self, Receiver<String>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn notify(&self, asset_label: &str) {
        if let Ok(sender) = self.sender.lock() {
            // Receiver gone means nobody is listening any more
            if sender.send(asset_label.to_string()).is_err() {
                log::debug!("notification for {} dropped: receiver closed", asset_label);
            }
        }
    }
}
