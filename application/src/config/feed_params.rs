//! Feed parameters: timing of the interactive feed.

use std::time::Duration;

/// Timing parameters of the feed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedParams {
    /// Quiet period after the last keystroke before the search runs.
    pub debounce: Duration,
    /// How long a notification stays visible before it is dismissed.
    pub notification_ttl: Duration,
}

impl Default for FeedParams {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            notification_ttl: Duration::from_secs(5),
        }
    }
}

impl FeedParams {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }
}
