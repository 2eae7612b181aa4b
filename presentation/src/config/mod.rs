//! Presentation-level configuration
//!
//! Resolved output settings for one-shot commands.

use echoq_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Command-line format wins over the configured one
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
