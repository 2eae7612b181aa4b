//! Request spinner for one-shot commands

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while a backend request is in flight.
///
/// A hidden spinner is a no-op, so callers do not need to branch on
/// `--quiet` or on JSON output.
pub struct RequestSpinner {
    bar: ProgressBar,
}

impl RequestSpinner {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// A visible spinner unless `quiet`
    pub fn start(message: impl Into<String>, quiet: bool) -> Self {
        if quiet {
            Self::hidden()
        } else {
            Self::new(message)
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    pub fn finish_ok(&self, message: impl Into<String>) {
        self.bar
            .finish_with_message(format!("{} {}", "v".green(), message.into()));
    }

    pub fn finish_err(&self, message: impl Into<String>) {
        self.bar
            .finish_with_message(format!("{} {}", "x".red(), message.into()));
    }

    /// Remove the spinner line entirely
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for RequestSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let spinner = RequestSpinner::start("Loading", true);
        assert!(spinner.bar.is_hidden());
        spinner.finish_ok("done");
        assert!(spinner.bar.is_finished());
    }
}
