//! Output configuration from TOML (`[output]` section)
//!
//! Controls how `echoq list`, `search` and the moderation commands print
//! their results. The interactive feed ignores it.

use echoq_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format of one-shot command output; `--output` takes precedence
    pub format: Option<OutputFormat>,
    /// Colored cards and outcome markers; `false` disables `colored` globally
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
