//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use models::TaskRow;
pub use repository::{PostgresTaskStore, TaskPgPool};

#[cfg(test)]
pub(crate) use repository::{row_to_task, to_new_row};
