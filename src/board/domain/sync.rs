//! Board phase and per-task optimistic update tags.

use crate::task::domain::TaskStatus;
use serde::{Deserialize, Serialize};

/// Session-level phase of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardPhase {
    /// The first refresh has not resolved yet.
    #[default]
    Loading,
    /// Steady state; mutations are accepted.
    Ready,
}

/// Confirmation state of a task whose status was patched locally.
///
/// A task with no tag is confirmed: its local status is what the store last
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncState {
    /// The speculative status is shown and the store call is in flight.
    Unconfirmed {
        /// Status applied locally.
        speculative: TaskStatus,
    },
    /// A refresh replaced the speculative status while the store call was
    /// still in flight.
    Overwritten {
        /// Status applied locally before the refresh.
        speculative: TaskStatus,
        /// Status the refresh reported.
        refreshed: TaskStatus,
    },
}

impl SyncState {
    /// Returns the status that was applied optimistically.
    #[must_use]
    pub const fn speculative(self) -> TaskStatus {
        match self {
            Self::Unconfirmed { speculative } | Self::Overwritten { speculative, .. } => {
                speculative
            }
        }
    }
}
