//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::TemporaryDatabase;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use taskboard::task::{
    adapters::postgres::{PostgresTaskStore, TaskPgPool},
    domain::{NewTask, OwnerId, TaskTitle},
};
use uuid::Uuid;

/// SQL that creates the task table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2026-01-01-000000_create_tasks/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Clock that advances one second per reading.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        base_instant() + Duration::seconds(self.ticks.fetch_add(1, Ordering::SeqCst))
    }
}

/// Clock that always reads the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock;

impl FixedClock {
    /// The instant this clock reports.
    #[must_use]
    pub fn instant() -> DateTime<Utc> {
        base_instant()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::instant()
    }
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_TASKS_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Store and pool backed by a throwaway database.
///
/// Fields drop in order, so pooled connections close before the database
/// is dropped.
pub struct StoreContext {
    /// Store stamping inserts with a [`SteppingClock`].
    pub store: PostgresTaskStore,
    /// Pool behind the store.
    pub pool: TaskPgPool,
    _temp_db: TemporaryDatabase,
}

impl StoreContext {
    /// Builds another store on the same database with its own clock.
    #[must_use]
    pub fn store_with_clock(&self, clock: Arc<dyn Clock + Send + Sync>) -> PostgresTaskStore {
        PostgresTaskStore::with_clock(self.pool.clone(), clock)
    }
}

fn setup_store_context(cluster: PostgresCluster) -> Result<StoreContext, BoxError> {
    cluster.ensure_template_exists(TEMPLATE_DB, apply_migrations)?;
    let temp_db = cluster
        .temporary_database_from_template(&format!("tasks_{}", Uuid::new_v4()), TEMPLATE_DB)?;

    let manager = ConnectionManager::<PgConnection>::new(temp_db.url());
    let pool: TaskPgPool = Pool::builder()
        .max_size(2)
        .build(manager)
        .map_err(|err| Box::new(err) as BoxError)?;
    let store = PostgresTaskStore::with_clock(pool.clone(), Arc::new(SteppingClock::default()));
    Ok(StoreContext {
        store,
        pool,
        _temp_db: temp_db,
    })
}

/// Provides a store on a fresh database, or `None` without a cluster.
///
/// # Errors
///
/// Returns an error if database creation or pool construction fails.
#[fixture]
pub async fn context(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<StoreContext>, BoxError> {
    let Some(cluster) = postgres_cluster else {
        return Ok(None);
    };
    tokio::task::spawn_blocking(move || setup_store_context(cluster).map(Some))
        .await
        .map_err(|err| Box::new(err) as BoxError)?
}

/// Builds an insert payload.
///
/// # Errors
///
/// Returns an error if the title is blank or over 200 characters.
pub fn new_task(owner: OwnerId, title: &str) -> Result<NewTask, BoxError> {
    let validated = TaskTitle::new(title).map_err(|err| Box::new(err) as BoxError)?;
    Ok(NewTask::new(validated, owner))
}
