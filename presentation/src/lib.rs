//! Presentation layer for echoq
//!
//! This crate contains CLI definitions, output formatters, the request
//! spinner and the interactive feed TUI.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FilterArg, OutputFormat, TokenCommand};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::RequestSpinner;
pub use tui::TuiApp;
