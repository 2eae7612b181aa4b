//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod feed;
mod output;
mod paths;

pub use api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FileApiConfig};
pub use feed::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_DISMISS_AFTER_SECS, FileNotificationConfig, FileSearchConfig,
};
pub use output::FileOutputConfig;
pub use paths::{FileLoggingConfig, FileSessionConfig};

use echoq_application::FeedParams;
use echoq_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend location and request shaping
    pub api: FileApiConfig,
    /// Search box debounce
    pub search: FileSearchConfig,
    /// Notification auto-dismiss
    pub notification: FileNotificationConfig,
    /// Session token storage
    pub session: FileSessionConfig,
    /// TUI log files
    pub logging: FileLoggingConfig,
    /// One-shot command output
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the client unusable; warnings mean a default is used
    /// in place of the configured value.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.api.validate();
        issues.extend(feed::validate(&self.search, &self.notification));
        issues
    }

    pub fn feed_params(&self) -> FeedParams {
        feed::to_feed_params(&self.search, &self.notification)
    }
}
