//! Task board configuration.

use crate::task::domain::TaskTitle;

/// Rules applied by the task board.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.max_title_length, 200);
///
/// let short = BoardConfig::default().with_max_title_length(40);
/// assert_eq!(short.max_title_length, 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Maximum task title length in characters, after trimming.
    pub max_title_length: usize,
}

impl BoardConfig {
    /// Sets the maximum title length.
    #[must_use]
    pub const fn with_max_title_length(mut self, max: usize) -> Self {
        self.max_title_length = max;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_title_length: TaskTitle::MAX_LENGTH,
        }
    }
}
