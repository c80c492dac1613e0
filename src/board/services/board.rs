//! Task list synchronisation between the board and the remote store.

use super::outcome::{CreateOutcome, IgnoredReason, RefreshOutcome, UpdateOutcome};
use crate::board::{
    domain::{
        BoardConfig, BoardPhase, BoardSnapshot, CREATE_FAILED, LOAD_FAILED, Notification,
        SyncState, UPDATE_FAILED,
    },
    ports::Notifier,
};
use crate::identity::services::SessionHandle;
use crate::task::{
    domain::{NewTask, OwnerId, Task, TaskId, TaskStatus, TaskTitle},
    ports::TaskStore,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct BoardState {
    phase: BoardPhase,
    tasks: Vec<Task>,
    creating: bool,
    draft: String,
    in_flight: HashMap<TaskId, InFlightUpdate>,
    next_generation: u64,
    loaded_for: Option<OwnerId>,
}

#[derive(Debug, Clone, Copy)]
struct InFlightUpdate {
    generation: u64,
    sync: SyncState,
}

impl BoardState {
    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Drops everything held for the previous user.
    fn reset(&mut self) {
        self.tasks.clear();
        self.in_flight.clear();
        self.draft.clear();
        self.loaded_for = None;
    }

    fn replace_tasks(&mut self, tasks: Vec<Task>) {
        for (id, update) in &mut self.in_flight {
            let Some(task) = tasks.iter().find(|task| task.id() == *id) else {
                continue;
            };
            let speculative = update.sync.speculative();
            if task.status() != speculative {
                warn!(
                    task_id = %id,
                    speculative = speculative.as_str(),
                    refreshed = task.status().as_str(),
                    "refresh overwrote an unconfirmed status"
                );
                update.sync = SyncState::Overwritten {
                    speculative,
                    refreshed: task.status(),
                };
            }
        }
        self.tasks = tasks;
    }

    /// Drops the tag for `id` unless a newer update has replaced it.
    fn settle(&mut self, id: TaskId, generation: u64) {
        if self
            .in_flight
            .get(&id)
            .is_some_and(|update| update.generation == generation)
        {
            self.in_flight.remove(&id);
        }
    }
}

/// Task list synchroniser.
///
/// Owns the in-memory task list for one session. Reads are full refreshes;
/// status changes are applied optimistically and resynchronised by a full
/// refresh when the store rejects them. No operation returns an error:
/// failures are reported through the [`Notifier`] and summarised in the
/// returned outcome.
///
/// State lives behind a mutex that is never held across a store call, so
/// operations may interleave on one executor. Clones share the same board.
pub struct TaskBoard<S, N>
where
    S: TaskStore,
    N: Notifier,
{
    store: Arc<S>,
    notifier: Arc<N>,
    session: SessionHandle,
    config: BoardConfig,
    state: Arc<Mutex<BoardState>>,
}

impl<S, N> Clone for TaskBoard<S, N>
where
    S: TaskStore,
    N: Notifier,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
            session: self.session.clone(),
            config: self.config,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S, N> TaskBoard<S, N>
where
    S: TaskStore,
    N: Notifier,
{
    /// Creates a board in the loading phase with the default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, notifier: Arc<N>, session: SessionHandle) -> Self {
        Self::with_config(store, notifier, session, BoardConfig::default())
    }

    /// Creates a board in the loading phase.
    #[must_use]
    pub fn with_config(
        store: Arc<S>,
        notifier: Arc<N>,
        session: SessionHandle,
        config: BoardConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            session,
            config,
            state: Arc::default(),
        }
    }

    /// Returns the session handle the board reads its owner from.
    #[must_use]
    pub const fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the current board state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let state = self.lock();
        BoardSnapshot {
            tasks: state.tasks.clone(),
            phase: state.phase,
            creating: state.creating,
            draft: state.draft.clone(),
            pending_updates: state.in_flight.len(),
        }
    }

    /// Returns the tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    /// Returns the session phase.
    #[must_use]
    pub fn phase(&self) -> BoardPhase {
        self.lock().phase
    }

    /// Returns `true` until the first refresh resolves.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase() == BoardPhase::Loading
    }

    /// Returns `true` while a create call is in flight.
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.lock().creating
    }

    /// Returns the optimistic update tag for a task, if one is pending.
    #[must_use]
    pub fn sync_state(&self, id: TaskId) -> Option<SyncState> {
        self.lock().in_flight.get(&id).map(|update| update.sync)
    }

    /// Returns the draft title input.
    #[must_use]
    pub fn draft(&self) -> String {
        self.lock().draft.clone()
    }

    /// Replaces the draft title input.
    pub fn set_draft(&self, text: impl Into<String>) {
        self.lock().draft = text.into();
    }

    /// Replaces the task list with the store's rows for the current owner.
    ///
    /// The list is tied to the user it was loaded for. Without a signed-in
    /// user, or when a different user is now signed in, the tasks, pending
    /// updates and draft are cleared first. On store failure the list is
    /// left as it is after that and a notification is emitted. Rows that
    /// arrive after the user has changed again are discarded.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(owner) = self.session.owner() else {
            warn!("refresh requested without a signed-in user");
            let mut state = self.lock();
            state.reset();
            state.phase = BoardPhase::Ready;
            drop(state);
            self.notifier.notify(Notification::store_failure(LOAD_FAILED));
            return RefreshOutcome::SignedOut;
        };
        self.forget_other_owner(owner);

        debug!(%owner, "refreshing tasks");
        let result = self.store.list(owner).await;
        match result {
            Ok(tasks) => {
                if self.session.owner() != Some(owner) {
                    debug!(%owner, "discarding tasks loaded for a previous user");
                    return RefreshOutcome::Superseded;
                }
                let count = tasks.len();
                let mut state = self.lock();
                state.replace_tasks(tasks);
                state.loaded_for = Some(owner);
                state.phase = BoardPhase::Ready;
                drop(state);
                debug!(%owner, count, "tasks refreshed");
                RefreshOutcome::Synced { count }
            }
            Err(err) => {
                warn!(%owner, error = %err, "task refresh failed");
                self.lock().phase = BoardPhase::Ready;
                self.notifier.notify(Notification::store_failure(LOAD_FAILED));
                RefreshOutcome::Failed(err)
            }
        }
    }

    fn forget_other_owner(&self, owner: OwnerId) {
        let mut state = self.lock();
        if state.loaded_for.is_some_and(|loaded| loaded != owner) {
            info!(%owner, "signed-in user changed, clearing the board");
            state.reset();
        }
    }

    /// Creates a task from `title` and refreshes the list.
    ///
    /// Blank titles and signed-out sessions are ignored silently; overlong
    /// titles are rejected with a notification. Neither reaches the store.
    /// A create issued while another is in flight returns
    /// [`CreateOutcome::Busy`]. On success the draft input is cleared and the
    /// list is refreshed rather than appended to.
    pub async fn create(&self, title: &str) -> CreateOutcome {
        let new_task = match self.begin_create(title) {
            Ok(new_task) => new_task,
            Err(outcome) => return outcome,
        };

        let owner = new_task.owner();
        debug!(%owner, "inserting task");
        let result = self.store.insert(new_task).await;
        let task = match result {
            Ok(task) => task,
            Err(err) => {
                warn!(%owner, error = %err, "task insert failed");
                self.notifier.notify(Notification::store_failure(CREATE_FAILED));
                self.lock().creating = false;
                return CreateOutcome::Failed(err);
            }
        };

        info!(task_id = %task.id(), %owner, "task created");
        self.lock().draft.clear();
        let refresh = self.refresh().await;
        self.lock().creating = false;
        CreateOutcome::Created { task, refresh }
    }

    fn begin_create(&self, title: &str) -> Result<NewTask, CreateOutcome> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(CreateOutcome::Ignored(IgnoredReason::EmptyTitle));
        }
        let Some(owner) = self.session.owner() else {
            return Err(CreateOutcome::Ignored(IgnoredReason::SignedOut));
        };
        let validated = TaskTitle::with_max_length(trimmed, self.config.max_title_length)
            .map_err(|err| {
                debug!(error = %err, "task title rejected");
                self.notifier.notify(Notification::validation(err.to_string()));
                CreateOutcome::Rejected(err)
            })?;

        let mut state = self.lock();
        if state.phase == BoardPhase::Loading {
            return Err(CreateOutcome::NotReady);
        }
        if state.creating {
            debug!("create already in flight");
            return Err(CreateOutcome::Busy);
        }
        state.creating = true;
        Ok(NewTask::new(validated, owner))
    }

    /// Creates a task from the draft input.
    ///
    /// The draft is cleared only when the store accepts the task.
    pub async fn submit_draft(&self) -> CreateOutcome {
        let draft = self.draft();
        self.create(&draft).await
    }

    /// Sets the status of a task, optimistically.
    ///
    /// The status is applied to the local list before the store call is
    /// issued, during the first poll of the returned future. If the store
    /// fails, a notification is emitted and the list is refreshed, so the
    /// task ends with the store's status.
    ///
    /// Only tasks on the board can be updated. Any other id returns
    /// [`UpdateOutcome::UnknownTask`] and no store update is issued, even
    /// though the row may exist in the store. A task owned by someone other
    /// than the signed-in user returns [`UpdateOutcome::NotOwned`], also
    /// without a store call.
    pub async fn update_status(&self, task_id: TaskId, status: TaskStatus) -> UpdateOutcome {
        let generation = match self.apply_optimistic(task_id, status) {
            Ok(generation) => generation,
            Err(outcome) => return outcome,
        };

        debug!(%task_id, status = status.as_str(), "updating task status");
        let result = self.store.update_status(task_id, status).await;
        match result {
            Ok(()) => {
                self.lock().settle(task_id, generation);
                UpdateOutcome::Confirmed
            }
            Err(err) => {
                warn!(%task_id, error = %err, "task status update failed");
                self.lock().settle(task_id, generation);
                self.notifier.notify(Notification::store_failure(UPDATE_FAILED));
                let refresh = self.refresh().await;
                UpdateOutcome::RolledBack {
                    error: err,
                    refresh,
                }
            }
        }
    }

    /// Advances a task to the next status in the cycle.
    pub async fn advance_status(&self, task_id: TaskId) -> UpdateOutcome {
        let current = self
            .lock()
            .tasks
            .iter()
            .find(|task| task.id() == task_id)
            .map(Task::status);
        match current {
            Some(status) => self.update_status(task_id, status.next()).await,
            None => UpdateOutcome::UnknownTask,
        }
    }

    fn apply_optimistic(&self, task_id: TaskId, status: TaskStatus) -> Result<u64, UpdateOutcome> {
        let owner = self.session.owner();
        let mut state = self.lock();
        if state.phase == BoardPhase::Loading {
            return Err(UpdateOutcome::NotReady);
        }
        let Some(task) = state.task_mut(task_id) else {
            debug!(%task_id, "status update for a task not on the board");
            return Err(UpdateOutcome::UnknownTask);
        };
        if owner != Some(task.owner()) {
            warn!(%task_id, "status update for a task owned by another user");
            return Err(UpdateOutcome::NotOwned);
        }
        task.set_status(status);

        let generation = state.next_generation;
        state.next_generation = generation.wrapping_add(1);
        state.in_flight.insert(
            task_id,
            InFlightUpdate {
                generation,
                sync: SyncState::Unconfirmed {
                    speculative: status,
                },
            },
        );
        Ok(generation)
    }
}
