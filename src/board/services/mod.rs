//! Task board orchestration.

mod board;
mod outcome;

pub use board::TaskBoard;
pub use outcome::{CreateOutcome, IgnoredReason, RefreshOutcome, UpdateOutcome};
