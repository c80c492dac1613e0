//! Store port for the remote task collection.

use crate::task::domain::{NewTask, OwnerId, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Remote task collection contract.
///
/// Visibility is scoped by owner; implementations are expected to enforce
/// it. Every call may fail and no call is retried by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every task belonging to `owner`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] on transport or
    /// authorisation failure.
    async fn list(&self, owner: OwnerId) -> TaskStoreResult<Vec<Task>>;

    /// Inserts a new task, assigning its identifier and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Rejected`] when the store refuses the
    /// payload or [`TaskStoreError::Unavailable`] on transport failure.
    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task>;

    /// Sets the status of a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist or
    /// [`TaskStoreError::Unavailable`] on transport failure.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store rejected the payload.
    #[error("store rejected request: {0}")]
    Rejected(String),

    /// Transport or persistence failure.
    #[error("store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a transport or persistence error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
