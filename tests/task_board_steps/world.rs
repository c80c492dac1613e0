//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::FlakyTaskStore;
use rstest::fixture;
use taskboard::{
    board::{
        adapters::RecordingNotifier,
        services::{CreateOutcome, TaskBoard, UpdateOutcome},
    },
    identity::{adapters::memory::InMemoryIdentityProvider, services::AuthService},
    task::domain::Task,
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<FlakyTaskStore, RecordingNotifier>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub auth: AuthService<InMemoryIdentityProvider>,
    pub store: Arc<FlakyTaskStore>,
    pub notifier: RecordingNotifier,
    pub board: TestBoard,
    pub last_create: Option<CreateOutcome>,
    pub last_update: Option<UpdateOutcome>,
}

impl BoardWorld {
    /// Creates a world with no accounts and an empty store.
    #[must_use]
    pub fn new() -> Self {
        let auth = AuthService::new(Arc::new(InMemoryIdentityProvider::new()));
        let store = FlakyTaskStore::new();
        let notifier = RecordingNotifier::new();
        let board = TaskBoard::new(
            Arc::clone(&store),
            Arc::new(notifier.clone()),
            auth.session(),
        );

        Self {
            auth,
            store,
            notifier,
            board,
            last_create: None,
            last_update: None,
        }
    }

    /// Finds a task on the board by title.
    pub fn task_titled(&self, title: &str) -> eyre::Result<Task> {
        self.board
            .tasks()
            .into_iter()
            .find(|task| task.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
