//! Domain model for the task board.

mod config;
mod notification;
mod snapshot;
mod sync;

pub use config::BoardConfig;
pub use notification::{
    CREATE_FAILED, LOAD_FAILED, Notification, NotificationKind, UPDATE_FAILED,
};
pub use snapshot::BoardSnapshot;
pub use sync::{BoardPhase, SyncState};
