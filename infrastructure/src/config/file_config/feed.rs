//! Feed timing configuration from TOML (`[search]` and `[notification]` sections)

use echoq_application::FeedParams;
use echoq_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_DISMISS_AFTER_SECS: u64 = 5;

/// Raw search configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Quiet period after the last keystroke, in milliseconds
    pub debounce_ms: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Raw notification configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationConfig {
    /// Seconds before a notification hides itself
    pub dismiss_after_secs: u64,
}

impl Default for FileNotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_secs: DEFAULT_DISMISS_AFTER_SECS,
        }
    }
}

/// Build feed timing from both sections; zero values use the defaults
pub fn to_feed_params(
    search: &FileSearchConfig,
    notification: &FileNotificationConfig,
) -> FeedParams {
    let debounce = match search.debounce_ms {
        0 => DEFAULT_DEBOUNCE_MS,
        ms => ms,
    };
    let ttl = match notification.dismiss_after_secs {
        0 => DEFAULT_DISMISS_AFTER_SECS,
        secs => secs,
    };
    FeedParams::default()
        .with_debounce(Duration::from_millis(debounce))
        .with_notification_ttl(Duration::from_secs(ttl))
}

pub fn validate(search: &FileSearchConfig, notification: &FileNotificationConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    if search.debounce_ms == 0 {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::ZeroDuration {
                field: "search.debounce_ms".to_string(),
            },
            format!(
                "search.debounce_ms is 0, falling back to {}ms",
                DEFAULT_DEBOUNCE_MS
            ),
        ));
    }
    if notification.dismiss_after_secs == 0 {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::ZeroDuration {
                field: "notification.dismiss_after_secs".to_string(),
            },
            format!(
                "notification.dismiss_after_secs is 0, falling back to {}s",
                DEFAULT_DISMISS_AFTER_SECS
            ),
        ));
    }
    issues
}
