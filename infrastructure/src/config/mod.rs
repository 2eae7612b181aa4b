//! Configuration file loading for echoq
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ECHOQ_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./echoq.toml` or `./.echoq.toml`
//! 4. Global: `$XDG_CONFIG_HOME/echoq/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_DISMISS_AFTER_SECS, DEFAULT_TIMEOUT_SECS,
    FileApiConfig, FileConfig, FileLoggingConfig, FileNotificationConfig, FileOutputConfig,
    FileSearchConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
