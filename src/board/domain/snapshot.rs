//! Read-only view of the board for rendering.

use super::BoardPhase;
use crate::task::domain::{Task, TaskId};
use serde::Serialize;

/// Point-in-time copy of the board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Tasks, newest first.
    pub tasks: Vec<Task>,
    /// Session phase.
    pub phase: BoardPhase,
    /// Whether a create call is in flight.
    pub creating: bool,
    /// Current draft title input.
    pub draft: String,
    /// Number of tasks with an unconfirmed or overwritten status patch.
    pub pending_updates: usize,
}

impl BoardSnapshot {
    /// Returns `true` until the first refresh resolves.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == BoardPhase::Loading
    }

    /// Returns `true` when ready and there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phase == BoardPhase::Ready && self.tasks.is_empty()
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when the draft can be submitted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.creating && !self.draft.trim().is_empty()
    }
}
