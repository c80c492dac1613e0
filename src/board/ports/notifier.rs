//! Notification sink port.

use crate::board::domain::Notification;

/// Receives transient notifications for the user.
///
/// Delivery is fire-and-forget; implementations must not block.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: Notification);
}
