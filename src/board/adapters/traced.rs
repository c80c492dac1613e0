//! Notifier that forwards to `tracing`.

use crate::board::{domain::Notification, ports::Notifier};

/// Emits every notification as a `warn` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::warn!(
            kind = ?notification.kind(),
            message = notification.message(),
            "user notification"
        );
    }
}
