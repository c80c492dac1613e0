//! In-memory task store for tests and local embedding.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, OwnerId, Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Creation timestamps come from the injected clock. Rows sharing a
/// timestamp are ordered by insertion, newest first.
#[derive(Clone)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    rows: HashMap<TaskId, StoredRow>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct StoredRow {
    seq: u64,
    task: Task,
}

impl InMemoryTaskStore {
    /// Creates an empty store backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty store backed by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }

    /// Returns a copy of a stored task regardless of owner.
    ///
    /// Intended for assertions against the authoritative state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.rows.get(&id).map(|row| row.task.clone()))
    }

    /// Returns the number of stored tasks across all owners.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn len(&self) -> TaskStoreResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.rows.len())
    }

    /// Returns `true` when no tasks are stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskStoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryTaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTaskStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> TaskStoreError {
    TaskStoreError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self, owner: OwnerId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut rows: Vec<&StoredRow> = state
            .rows
            .values()
            .filter(|row| row.task.owner() == owner)
            .collect();
        rows.sort_by_key(|row| Reverse((row.task.created_at(), row.seq)));
        Ok(rows.into_iter().map(|row| row.task.clone()).collect())
    }

    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        let id = TaskId::new();
        let stored = Task::from_new(task, id, self.clock.utc());
        let seq = state.next_seq;
        state.next_seq = seq.saturating_add(1);
        state.rows.insert(
            id,
            StoredRow {
                seq,
                task: stored.clone(),
            },
        );
        Ok(stored)
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let row = state
            .rows
            .get_mut(&id)
            .ok_or(TaskStoreError::NotFound(id))?;
        row.task.set_status(status);
        Ok(())
    }
}
