//! Port contracts for the task board.

pub mod notifier;

pub use notifier::Notifier;
