//! Taskboard: authenticated task tracking with optimistic synchronisation.
//!
//! Signed-in users create short text tasks and cycle each one through
//! `todo`, `in_progress` and `done`. The crate keeps a client-side task list
//! in step with a remote store, applying status changes optimistically and
//! resynchronising by full refresh when the store disagrees.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, the status cycle and the task store
//! - [`identity`]: Sign-up, sign-in, sign-out and the session handle
//! - [`board`]: The task list synchroniser

pub mod board;
pub mod identity;
pub mod task;
