//! Infrastructure layer for echoq
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration loading and log setup.

pub mod config;
pub mod http;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileApiConfig, FileConfig, FileLoggingConfig, FileNotificationConfig,
    FileOutputConfig, FileSearchConfig, FileSessionConfig,
};
pub use http::ReqwestHttpClient;
pub use session::FileSessionStore;
