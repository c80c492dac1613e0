//! In-memory integration tests for authentication feeding the board.

use super::helpers::{App, app};
use rstest::rstest;
use taskboard::{
    board::{
        domain::LOAD_FAILED,
        services::{CreateOutcome, IgnoredReason, RefreshOutcome, UpdateOutcome},
    },
    identity::services::AuthMode,
    task::domain::TaskStatus,
};

#[rstest]
#[tokio::test]
async fn board_waits_for_session(app: App) -> eyre::Result<()> {
    let session = app.auth.session();
    eyre::ensure!(session.is_loading());

    let user = app.auth.restore().await;

    eyre::ensure!(user.is_none());
    eyre::ensure!(!session.is_loading());
    let outcome = app.board.create("Signed out").await;
    eyre::ensure!(matches!(
        outcome,
        CreateOutcome::Ignored(IgnoredReason::SignedOut)
    ));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn signed_out_refresh_reports_failure(app: App) -> eyre::Result<()> {
    app.auth.restore().await;

    let outcome = app.board.refresh().await;

    eyre::ensure!(matches!(outcome, RefreshOutcome::SignedOut));
    eyre::ensure!(app.notifier.messages() == [LOAD_FAILED]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn sign_in_after_sign_up_reuses_account(app: App) -> eyre::Result<()> {
    let registered = app
        .auth
        .submit(AuthMode::SignUp, "again@example.com", "password123")
        .await?;
    app.auth.sign_out().await?;

    let signed_in = app
        .auth
        .submit(AuthMode::SignIn, " again@example.com ", "password123")
        .await?;

    eyre::ensure!(signed_in == registered);
    eyre::ensure!(app.auth.session().owner() == Some(registered.owner_id()));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn rejected_sign_in_leaves_session_signed_out(app: App) -> eyre::Result<()> {
    app.auth.restore().await;

    let result = app.auth.sign_in("nobody@example.com", "password123").await;

    let Err(err) = result else {
        eyre::bail!("unknown account should be rejected");
    };
    eyre::ensure!(err.message() == "Invalid login credentials");
    eyre::ensure!(app.auth.session().current_user().is_none());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn sign_out_refresh_empties_the_board(app: App) -> eyre::Result<()> {
    let app = app.signed_up("alice@example.com").await?;
    app.board.create("Alice secret").await;
    app.board.set_draft("unfinished");
    app.auth.sign_out().await?;

    let outcome = app.board.refresh().await;

    eyre::ensure!(matches!(outcome, RefreshOutcome::SignedOut));
    eyre::ensure!(app.board.tasks().is_empty());
    eyre::ensure!(app.board.draft().is_empty());
    eyre::ensure!(app.notifier.messages() == [LOAD_FAILED]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn next_user_cannot_touch_previous_users_tasks(app: App) -> eyre::Result<()> {
    let app = app.signed_up("alice@example.com").await?;
    let CreateOutcome::Created { task: secret, .. } = app.board.create("Alice secret").await
    else {
        eyre::bail!("task was not created");
    };
    app.auth.sign_out().await?;
    app.auth.sign_up("bob@example.com", "password123").await?;

    let before_refresh = app.board.update_status(secret.id(), TaskStatus::Done).await;
    eyre::ensure!(
        matches!(before_refresh, UpdateOutcome::NotOwned),
        "unexpected outcome: {before_refresh:?}"
    );

    let refresh = app.board.refresh().await;
    eyre::ensure!(matches!(refresh, RefreshOutcome::Synced { count: 0 }));
    eyre::ensure!(app.board.tasks().is_empty());

    let after_refresh = app.board.update_status(secret.id(), TaskStatus::Done).await;
    eyre::ensure!(matches!(after_refresh, UpdateOutcome::UnknownTask));
    eyre::ensure!(app.store.stored_status(secret.id())? == Some(TaskStatus::Todo));
    Ok(())
}
