//! UI event types emitted by FeedController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. Notifications travel separately through the
//! [`NotificationChannel`](crate::notification::NotificationChannel).

use crate::use_cases::question_collection::QuestionQuery;
use echoq_domain::{ModerationAction, Question, QuestionId};

/// Events emitted by FeedController for the presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    // === Question list ===
    /// A list or search request was issued
    FetchStarted { query: QuestionQuery },
    /// The held list was replaced by a completed fetch
    QuestionsUpdated {
        query: QuestionQuery,
        questions: Vec<Question>,
    },
    /// A fetch failed; the held list is unchanged
    FetchFailed { query: QuestionQuery, reason: String },

    // === Moderation ===
    /// A card action was sent to the backend
    ActionStarted {
        action: ModerationAction,
        question_id: QuestionId,
    },
    /// A card action finished (the notification carries the user-facing text)
    ActionCompleted {
        action: ModerationAction,
        question_id: QuestionId,
        success: bool,
    },
}
