//! Notifier adapters.

mod recording;
mod traced;

pub use recording::RecordingNotifier;
pub use traced::TracingNotifier;
