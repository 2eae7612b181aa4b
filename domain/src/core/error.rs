//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid filter: {0} (expected 'answered' or 'unanswered')")]
    InvalidFilter(String),

    #[error("Invalid question id: {0}")]
    InvalidQuestionId(String),

    #[error("Session token cannot be empty")]
    EmptyToken,

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_display() {
        let error = DomainError::InvalidFilter("pending".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid filter: pending (expected 'answered' or 'unanswered')"
        );
    }
}
