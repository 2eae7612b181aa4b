//! Notification value object
//!
//! A single transient status message raised after a moderation action.
//! Only one notification exists at a time; a new one replaces the old.

use serde::{Deserialize, Serialize};

/// Outcome category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Error,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A status message with a visibility flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub status: NotificationStatus,
    pub text: String,
    pub show: bool,
}

impl Notification {
    /// A visible success notification
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Success,
            text: text.into(),
            show: true,
        }
    }

    /// A visible error notification
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Error,
            text: text.into(),
            show: true,
        }
    }

    /// The same notification, hidden
    pub fn dismissed(self) -> Self {
        Self {
            show: false,
            ..self
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == NotificationStatus::Error
    }
}

impl Default for Notification {
    /// Hidden, empty success slot (the initial state of the channel)
    fn default() -> Self {
        Self {
            status: NotificationStatus::Success,
            text: String::new(),
            show: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let n = Notification::success("done");
        assert_eq!(n.status, NotificationStatus::Success);
        assert!(n.show);
        assert!(!n.is_error());

        let n = Notification::error("nope");
        assert!(n.is_error());
        assert_eq!(n.text, "nope");
    }

    #[test]
    fn test_dismissed_keeps_text() {
        let n = Notification::error("nope").dismissed();
        assert!(!n.show);
        assert_eq!(n.text, "nope");
    }

    #[test]
    fn test_default_is_hidden() {
        assert!(!Notification::default().show);
    }

    #[test]
    fn test_serialize_lowercase_status() {
        let value = serde_json::to_value(Notification::success("ok")).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["show"], true);
    }
}
