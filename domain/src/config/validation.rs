//! Configuration issues detected at startup.
//!
//! Validation never aborts on its own; callers decide what to do with
//! [`Severity::Error`] issues (the binary refuses to start).

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead of the configured value.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required field is empty.
    EmptyValue { field: String },
    /// A URL field does not use http or https.
    InvalidUrl { field: String, value: String },
    /// A duration field is zero.
    ZeroDuration { field: String },
    /// An endpoint path does not start with `/`.
    RelativePath { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::EmptyValue {
                field: "api.base_url".into(),
            },
            "api.base_url is empty",
        );
        assert!(issue.is_error());

        let issue = ConfigIssue::warning(
            ConfigIssueCode::ZeroDuration {
                field: "search.debounce_ms".into(),
            },
            "zero",
        );
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!issue.is_error());
    }
}
