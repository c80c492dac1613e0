//! `PostgreSQL` store implementation for tasks.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{NewTask, OwnerId, PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::debug;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl PostgresTaskStore {
    /// Creates a store from a `PostgreSQL` connection pool.
    #[must_use]
    pub fn new(pool: TaskPgPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }

    /// Creates a store that stamps inserts with the given clock.
    #[must_use]
    pub fn with_clock(pool: TaskPgPool, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::unavailable)?
    }
}

impl std::fmt::Debug for PostgresTaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresTaskStore")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list(&self, owner: OwnerId) -> TaskStoreResult<Vec<Task>> {
        debug!(%owner, "listing tasks");
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner.into_inner()))
                .order((tasks::created_at.desc(), tasks::seq.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::unavailable)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task> {
        let stored = Task::from_new(task, TaskId::new(), self.clock.utc());
        let new_row = to_new_row(&stored);
        debug!(task_id = %stored.id(), owner = %stored.owner(), "inserting task");

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(map_insert_error)?;
            Ok(stored)
        })
        .await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<()> {
        debug!(task_id = %id, status = status.as_str(), "updating task status");
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(tasks::status.eq(status.as_str()))
                .execute(connection)
                .map_err(TaskStoreError::unavailable)?;
            if affected == 0 {
                return Err(TaskStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn map_insert_error(err: DieselError) -> TaskStoreError {
    match err {
        DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation,
            ref info,
        ) => TaskStoreError::Rejected(info.message().to_owned()),
        _ => TaskStoreError::unavailable(err),
    }
}

pub(crate) fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
    }
}

pub(crate) fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title: persisted_title,
        status: persisted_status,
        created_at,
    } = row;

    let title = TaskTitle::new(&persisted_title).map_err(TaskStoreError::unavailable)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskStoreError::unavailable)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        status,
        owner: OwnerId::from_uuid(owner_id),
        created_at,
    }))
}
