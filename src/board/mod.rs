//! The task board: the signed-in user's task list kept in step with the
//! remote store.
//!
//! [`services::TaskBoard`] performs full-refresh reads, issues create and
//! status update mutations, and applies status changes optimistically with
//! rollback by refetch. Failures surface as [`domain::Notification`]s
//! delivered to a [`ports::Notifier`].
//!
//! Operations are not serialised against each other. A refresh triggered by
//! one failure can overwrite the optimistic status of another update that is
//! still in flight; such tasks are tagged [`domain::SyncState::Overwritten`]
//! until their own update resolves.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
