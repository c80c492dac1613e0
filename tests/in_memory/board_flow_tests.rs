//! In-memory integration tests for the task board.

use super::helpers::{App, app};
use rstest::rstest;
use taskboard::{
    board::{
        domain::{CREATE_FAILED, LOAD_FAILED, UPDATE_FAILED},
        services::{CreateOutcome, IgnoredReason, RefreshOutcome, UpdateOutcome},
    },
    task::domain::{Task, TaskStatus},
};

fn statuses(app: &App) -> Vec<TaskStatus> {
    app.board.tasks().iter().map(Task::status).collect()
}

#[rstest]
#[tokio::test]
async fn create_in_empty_store_shows_one_todo(app: App) -> eyre::Result<()> {
    let app = app.signed_up("milk@example.com").await?;
    eyre::ensure!(app.board.snapshot().is_empty());

    let outcome = app.board.create("Buy milk").await;

    eyre::ensure!(outcome.is_created(), "create failed: {outcome:?}");
    let tasks = app.board.tasks();
    eyre::ensure!(tasks.len() == 1);
    let task = tasks.first().ok_or_else(|| eyre::eyre!("missing task"))?;
    eyre::ensure!(task.title().as_str() == "Buy milk");
    eyre::ensure!(task.status() == TaskStatus::Todo);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn status_cycles_back_to_todo(app: App) -> eyre::Result<()> {
    let app = app.signed_up("cycle@example.com").await?;
    let CreateOutcome::Created { task, .. } = app.board.create("Cycle me").await else {
        eyre::bail!("task was not created");
    };

    let mut seen = Vec::new();
    for _ in 0..3 {
        let outcome = app.board.advance_status(task.id()).await;
        eyre::ensure!(outcome.is_confirmed(), "update failed: {outcome:?}");
        seen.extend(statuses(&app));
    }

    eyre::ensure!(seen == [TaskStatus::InProgress, TaskStatus::Done, TaskStatus::Todo]);
    eyre::ensure!(app.store.stored_status(task.id())? == Some(TaskStatus::Todo));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn empty_input_creates_nothing(app: App) -> eyre::Result<()> {
    let app = app.signed_up("empty@example.com").await?;
    app.board.set_draft("   ");

    let outcome = app.board.submit_draft().await;

    eyre::ensure!(matches!(
        outcome,
        CreateOutcome::Ignored(IgnoredReason::EmptyTitle)
    ));
    eyre::ensure!(app.store.insert_calls() == 0);
    eyre::ensure!(app.board.tasks().is_empty());
    eyre::ensure!(app.notifier.notifications().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn insert_then_failed_refresh_keeps_previous_list(app: App) -> eyre::Result<()> {
    let app = app.signed_up("phantom@example.com").await?;
    app.board.create("Existing").await;
    let before = app.board.tasks();
    app.store.fail_list(true);

    let outcome = app.board.create("Unsynced").await;

    let CreateOutcome::Created { refresh, .. } = outcome else {
        eyre::bail!("insert should have succeeded");
    };
    eyre::ensure!(matches!(refresh, RefreshOutcome::Failed(_)));
    eyre::ensure!(app.board.tasks() == before);
    eyre::ensure!(app.store.inner().len()? == 2);
    eyre::ensure!(app.notifier.messages() == [LOAD_FAILED]);

    app.store.fail_list(false);
    app.board.refresh().await;
    eyre::ensure!(app.board.tasks().len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn failed_insert_notifies_once(app: App) -> eyre::Result<()> {
    let app = app.signed_up("insert@example.com").await?;
    app.store.fail_insert(true);

    let outcome = app.board.create("Nope").await;

    eyre::ensure!(matches!(outcome, CreateOutcome::Failed(_)));
    eyre::ensure!(app.notifier.messages() == [CREATE_FAILED]);
    eyre::ensure!(!app.board.is_creating());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn failed_update_ends_with_store_status(app: App) -> eyre::Result<()> {
    let app = app.signed_up("update@example.com").await?;
    let CreateOutcome::Created { task, .. } = app.board.create("Stuck").await else {
        eyre::bail!("task was not created");
    };
    app.store.fail_update(true);

    let outcome = app.board.update_status(task.id(), TaskStatus::Done).await;

    eyre::ensure!(matches!(outcome, UpdateOutcome::RolledBack { .. }));
    eyre::ensure!(statuses(&app) == [TaskStatus::Todo]);
    eyre::ensure!(app.store.stored_status(task.id())? == Some(TaskStatus::Todo));
    eyre::ensure!(app.notifier.messages() == [UPDATE_FAILED]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn tasks_are_private_to_their_owner(app: App) -> eyre::Result<()> {
    let app = app.signed_up("first@example.com").await?;
    app.board.create("First user's task").await;
    app.auth.sign_out().await?;

    app.auth.sign_up("second@example.com", "password123").await?;
    app.board.refresh().await;

    eyre::ensure!(app.board.tasks().is_empty());
    eyre::ensure!(app.store.inner().len()? == 1);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn refresh_picks_up_rows_written_elsewhere(app: App) -> eyre::Result<()> {
    let app = app.signed_up("shared@example.com").await?;
    let owner = app
        .auth
        .session()
        .owner()
        .ok_or_else(|| eyre::eyre!("user should be signed in"))?;
    let written = app.store.seed(owner, "From another device").await?;
    eyre::ensure!(app.board.tasks().is_empty());

    let outcome = app.board.refresh().await;

    eyre::ensure!(matches!(outcome, RefreshOutcome::Synced { count: 1 }));
    eyre::ensure!(app.board.snapshot().task(written.id()).is_some());
    Ok(())
}
