//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Trimmed task title.
    pub title: String,
    /// Task status.
    pub status: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
///
/// `seq` is filled by the column's sequence default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Trimmed task title.
    pub title: String,
    /// Task status.
    pub status: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}
