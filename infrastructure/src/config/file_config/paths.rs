//! Storage locations from TOML (`[session]` and `[logging]` sections)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "echoq";

/// Raw session storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Key/value file holding the session token
    pub storage_path: Option<PathBuf>,
}

impl FileSessionConfig {
    pub fn resolved_path(&self) -> Option<PathBuf> {
        match &self.storage_path {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join(APP_DIR).join("storage.json")),
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the rolling TUI log files
    pub directory: Option<PathBuf>,
}

impl FileLoggingConfig {
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        match &self.directory {
            Some(dir) => Some(expand_home(dir)),
            None => dirs::data_dir().map(|d| d.join(APP_DIR).join("logs")),
        }
    }
}

/// Replace a leading `~` with the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
