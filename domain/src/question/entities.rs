//! Question entity

use super::asked_at;
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Backend identifier of a question (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for QuestionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(QuestionId)
            .map_err(|_| DomainError::InvalidQuestionId(s.to_string()))
    }
}

/// A question in the feed (Entity)
///
/// Replaced wholesale on every fetch. `order` is the position assigned by
/// the backend for the current list and is only meaningful as a render key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Position in the current list (render key and display index)
    pub order: u32,
    /// Unique identifier
    pub question_id: QuestionId,
    /// Question text
    pub question: String,
    /// Whether the answer is publicly visible
    pub show: bool,
    /// When the question was asked
    #[serde(with = "asked_at")]
    pub asked_at: DateTime<Utc>,
}

impl Question {
    pub fn new(
        order: u32,
        question_id: QuestionId,
        question: impl Into<String>,
        show: bool,
        asked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            order,
            question_id,
            question: question.into(),
            show,
            asked_at,
        }
    }

    /// Label for the visibility flag as shown on a card
    pub fn visibility_label(&self) -> &'static str {
        if self.show { "public" } else { "hidden" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "order": 1,
            "questionId": 42,
            "question": "What is your favourite book?",
            "show": true,
            "askedAt": "2023-03-14T09:26:53Z"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.order, 1);
        assert_eq!(q.question_id, QuestionId(42));
        assert_eq!(q.question, "What is your favourite book?");
        assert!(q.show);
        assert_eq!(q.asked_at, Utc.with_ymd_and_hms(2023, 3, 14, 9, 26, 53).unwrap());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let q = Question::new(
            0,
            QuestionId(7),
            "hi?",
            false,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        );
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["questionId"], 7);
        assert_eq!(value["askedAt"], "2024-01-02T03:04:05Z");
        assert!(value.get("question_id").is_none());
    }

    #[test]
    fn test_question_id_from_str() {
        assert_eq!("42".parse::<QuestionId>().unwrap(), QuestionId(42));
        assert_eq!(" 7 ".parse::<QuestionId>().unwrap(), QuestionId(7));
        assert!(matches!(
            "abc".parse::<QuestionId>(),
            Err(DomainError::InvalidQuestionId(_))
        ));
    }

    #[test]
    fn test_visibility_label() {
        let mut q = Question::new(0, QuestionId(1), "q", true, Utc::now());
        assert_eq!(q.visibility_label(), "public");
        q.show = false;
        assert_eq!(q.visibility_label(), "hidden");
    }
}
