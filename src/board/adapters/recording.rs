//! Notifier that keeps every notification in memory.

use crate::board::{domain::Notification, ports::Notifier};
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe notifier that records notifications in delivery order.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded notification.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .iter()
            .map(|notification| notification.message().to_owned())
            .collect()
    }

    /// Removes and returns every recorded notification.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.log.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
