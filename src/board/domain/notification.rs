//! User-visible notifications emitted by the task board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when a refresh fails.
pub const LOAD_FAILED: &str = "Failed to load tasks";
/// Message shown when an insert fails.
pub const CREATE_FAILED: &str = "Failed to create task";
/// Message shown when a status update fails.
pub const UPDATE_FAILED: &str = "Failed to update status";

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Input was rejected before any store call.
    Validation,
    /// A store call failed.
    StoreFailure,
}

/// Transient, non-fatal message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
}

impl Notification {
    /// Creates a validation notification.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Validation,
            message: message.into(),
        }
    }

    /// Creates a store failure notification.
    #[must_use]
    pub fn store_failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::StoreFailure,
            message: message.into(),
        }
    }

    /// Returns the notification category.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
