//! Moderation actions on a question card
//!
//! Each action has a fixed pair of feedback texts and a fixed list to refetch
//! after it succeeds. Edit and delete refetch the unanswered list while the
//! visibility toggle refetches the answered list.

use crate::question::{Filter, QuestionId};

/// The three actions a card supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationAction {
    /// Submit or replace the response to a question
    Edit,
    /// Toggle whether the response is publicly visible
    Turn,
    /// Delete a question together with its response
    Delete,
}

impl ModerationAction {
    /// Notification text raised when the backend accepts the action
    pub fn success_text(&self) -> &'static str {
        match self {
            Self::Edit => "Succesesfully edited the response",
            Self::Turn => "Succesesfully changed the visibility",
            Self::Delete => "Succesesfully deleted a question and its response",
        }
    }

    /// Notification text raised for any non-200 outcome
    pub fn failure_text(&self) -> &'static str {
        match self {
            Self::Edit => "Failed to change the response",
            Self::Turn => "Failed to change the visibility",
            Self::Delete => "Failed to delete a question and its response",
        }
    }

    /// List fetched again after a successful action
    pub fn refetch_filter(&self) -> Filter {
        match self {
            Self::Edit | Self::Delete => Filter::Unanswered,
            Self::Turn => Filter::Answered,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Turn => "turn",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User intent emitted by a question card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    Edit {
        question_id: QuestionId,
        show: bool,
        response: String,
    },
    Turn {
        question_id: QuestionId,
        show: bool,
    },
    Delete {
        question_id: QuestionId,
    },
}

impl CardIntent {
    pub fn action(&self) -> ModerationAction {
        match self {
            CardIntent::Edit { .. } => ModerationAction::Edit,
            CardIntent::Turn { .. } => ModerationAction::Turn,
            CardIntent::Delete { .. } => ModerationAction::Delete,
        }
    }

    pub fn question_id(&self) -> QuestionId {
        match self {
            CardIntent::Edit { question_id, .. }
            | CardIntent::Turn { question_id, .. }
            | CardIntent::Delete { question_id } => *question_id,
        }
    }
}
