//! TUI Presenter - Converts Application Events to TUI State
//!
//! Adapter between the application layer (which emits [`UiEvent`]s) and
//! the TUI layer (which manages view state).
//!
//! ```text
//! FeedController (UiEvent)
//!         ↓
//!   TuiPresenter (this module)
//!         ↓
//!   FeedState (view state)
//!         ↓
//!   widgets
//! ```

use super::state::FeedState;
use echoq_application::UiEvent;
use echoq_domain::Notification;
use tracing::debug;

#[derive(Debug, Default)]
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Apply a UiEvent to the state
    pub fn apply(&self, state: &mut FeedState, event: &UiEvent) {
        match event {
            UiEvent::FetchStarted { query } => {
                state.pending_query = Some(query.clone());
            }
            UiEvent::QuestionsUpdated { query, questions } => {
                state.set_questions(questions.clone());
                state.shown_query = Some(query.clone());
                state.fetch_settled(query);
            }
            UiEvent::FetchFailed { query, reason } => {
                debug!("Fetch failed for {}: {}", query, reason);
                state.fetch_settled(query);
                state.set_flash(format!("Could not load {}", query));
            }
            UiEvent::ActionStarted {
                action,
                question_id,
            } => {
                state.pending_actions += 1;
                state.set_flash(format!("{} question {}...", action, question_id));
            }
            UiEvent::ActionCompleted { .. } => {
                state.pending_actions = state.pending_actions.saturating_sub(1);
                state.flash_message = None;
            }
        }
    }

    /// Mirror the notification channel into the state
    pub fn apply_notification(&self, state: &mut FeedState, notification: &Notification) {
        state.alert = notification.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use echoq_application::QuestionQuery;
    use echoq_domain::{Filter, ModerationAction, Question, QuestionId};

    fn questions(n: u32) -> Vec<Question> {
        (1..=n)
            .map(|i| Question::new(i, QuestionId(i as i64), "q", false, Utc::now()))
            .collect()
    }

    #[test]
    fn test_questions_updated_replaces_list_and_clears_loading() {
        let presenter = TuiPresenter::new();
        let mut state = FeedState::new();
        let query = QuestionQuery::list(Filter::Unanswered);

        presenter.apply(&mut state, &UiEvent::FetchStarted { query: query.clone() });
        assert!(state.is_loading());

        presenter.apply(
            &mut state,
            &UiEvent::QuestionsUpdated {
                query: query.clone(),
                questions: questions(3),
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.result_count(), 3);
        assert_eq!(state.shown_query, Some(query));
    }

    #[test]
    fn test_fetch_failed_keeps_list() {
        let presenter = TuiPresenter::new();
        let mut state = FeedState::new();
        state.set_questions(questions(2));
        let query = QuestionQuery::search("x", Filter::Answered);

        presenter.apply(&mut state, &UiEvent::FetchStarted { query: query.clone() });
        presenter.apply(
            &mut state,
            &UiEvent::FetchFailed {
                query,
                reason: "backend answered with status 500".into(),
            },
        );

        assert_eq!(state.result_count(), 2);
        assert!(!state.is_loading());
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_action_progress_counter() {
        let presenter = TuiPresenter::new();
        let mut state = FeedState::new();
        let started = UiEvent::ActionStarted {
            action: ModerationAction::Delete,
            question_id: QuestionId(1),
        };
        presenter.apply(&mut state, &started);
        assert_eq!(state.pending_actions, 1);

        presenter.apply(
            &mut state,
            &UiEvent::ActionCompleted {
                action: ModerationAction::Delete,
                question_id: QuestionId(1),
                success: true,
            },
        );
        assert_eq!(state.pending_actions, 0);
    }

    #[test]
    fn test_notification_is_mirrored() {
        let presenter = TuiPresenter::new();
        let mut state = FeedState::new();
        presenter.apply_notification(&mut state, &Notification::error("Failed to change the response"));
        assert!(state.alert.show);
        assert!(state.alert.is_error());
    }
}
