//! Results of task board operations.
//!
//! Board operations never return `Err`. Store failures have already been
//! reported through the notifier and repaired by the time an outcome is
//! returned; the outcome only tells the caller what happened.

use crate::task::{
    domain::{Task, TaskDomainError},
    ports::TaskStoreError,
};

/// Result of a full refresh.
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// The list was replaced with the store's rows.
    Synced {
        /// Number of tasks now held.
        count: usize,
    },
    /// No user is signed in; the board was cleared and no store call was made.
    SignedOut,
    /// The signed-in user changed while the rows were loading; they were
    /// discarded.
    Superseded,
    /// The store call failed; the list is unchanged.
    Failed(TaskStoreError),
}

impl RefreshOutcome {
    /// Returns `true` when the list was replaced.
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        matches!(self, Self::Synced { .. })
    }
}

/// Why a create request was dropped without feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoredReason {
    /// The title was blank.
    EmptyTitle,
    /// No user is signed in.
    SignedOut,
}

/// Result of a create request.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// The store accepted the task and a refresh followed.
    Created {
        /// Task as returned by the store.
        task: Task,
        /// Result of the follow-up refresh.
        refresh: RefreshOutcome,
    },
    /// Nothing happened.
    Ignored(IgnoredReason),
    /// The title failed validation; a notification was emitted.
    Rejected(TaskDomainError),
    /// The first refresh has not resolved yet.
    NotReady,
    /// Another create is in flight.
    Busy,
    /// The store rejected or failed the insert.
    Failed(TaskStoreError),
}

impl CreateOutcome {
    /// Returns `true` when the store accepted the task.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Result of a status update.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The store confirmed the optimistic status.
    Confirmed,
    /// The store call failed and a refresh replaced the speculative status.
    RolledBack {
        /// Store failure.
        error: TaskStoreError,
        /// Result of the resynchronising refresh.
        refresh: RefreshOutcome,
    },
    /// The task is not on the board; no store call was made.
    UnknownTask,
    /// The task belongs to someone other than the signed-in user; no store
    /// call was made.
    NotOwned,
    /// The first refresh has not resolved yet.
    NotReady,
}

impl UpdateOutcome {
    /// Returns `true` when the store confirmed the update.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}
