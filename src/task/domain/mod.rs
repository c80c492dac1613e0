//! Domain model for tasks.
//!
//! A task is a short titled record owned by one user whose status cycles
//! through `todo`, `in_progress` and `done`. Infrastructure concerns stay
//! outside this boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{OwnerId, TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
