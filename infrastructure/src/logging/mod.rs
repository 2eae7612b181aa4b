//! Logging setup
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it logs to
//! a daily rolling file through a non-blocking writer instead; the returned
//! [`WorkerGuard`] must stay alive until shutdown or buffered lines are lost.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "echoq.log";

/// Level name for a `-v` count
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// `RUST_LOG` when set, otherwise the level for `verbosity`
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Log to stderr
pub fn init_stderr(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Log to `directory/echoq.log.YYYY-MM-DD`
pub fn init_file(verbosity: u8, directory: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(directory)?;
    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}
