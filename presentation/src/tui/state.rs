//! TUI application state
//!
//! Single source of truth for everything the feed TUI renders.
//! Updated by key actions, by TuiPresenter (UiEvent → state) and by
//! notification updates from the watch channel.

use super::mode::InputMode;
use echoq_application::QuestionQuery;
use echoq_domain::{Filter, Notification, Question, QuestionId};
use std::time::{Duration, Instant};

/// A single editable text buffer with a byte-offset cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    pub text: String,
    pub cursor: usize,
}

impl TextBuffer {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            cursor: text.len(),
            text,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_char(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Response being written in the editor modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub question_id: QuestionId,
    pub question: String,
    pub response: TextBuffer,
    pub show: bool,
}

/// Delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub question_id: QuestionId,
    pub question: String,
}

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct FeedState {
    // -- Mode --
    pub mode: InputMode,

    // -- Search box --
    pub search: TextBuffer,

    // -- Feed --
    pub view_filter: Filter,
    pub questions: Vec<Question>,
    pub selected: usize,
    /// Query whose result is currently displayed
    pub shown_query: Option<QuestionQuery>,
    /// Most recently issued fetch, until it completes
    pub pending_query: Option<QuestionQuery>,
    pub pending_actions: usize,

    // -- Feedback --
    pub alert: Notification,
    pub flash_message: Option<(String, Instant)>,

    // -- Overlays --
    pub editor: Option<EditDraft>,
    pub confirm: Option<PendingDelete>,
    pub show_help: bool,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Feed --

    /// Replace the displayed list, keeping the selection in range
    pub fn set_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.selected = self.selected.min(self.questions.len().saturating_sub(1));
    }

    pub fn result_count(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.questions.get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        self.pending_query.is_some()
    }

    /// A fetch for `query` finished (either way)
    pub fn fetch_settled(&mut self, query: &QuestionQuery) {
        if self.pending_query.as_ref() == Some(query) {
            self.pending_query = None;
        }
    }

    // -- Selection --

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.questions.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.questions.len().saturating_sub(1);
    }

    // -- Overlays --

    /// Open the editor for the selected card
    pub fn open_editor(&mut self) -> bool {
        let Some(question) = self.selected_question() else {
            return false;
        };
        self.editor = Some(EditDraft {
            question_id: question.question_id,
            question: question.question.clone(),
            response: TextBuffer::default(),
            show: question.show,
        });
        self.mode = InputMode::Edit;
        true
    }

    /// Ask before deleting the selected card
    pub fn open_confirm(&mut self) -> bool {
        let Some(question) = self.selected_question() else {
            return false;
        };
        self.confirm = Some(PendingDelete {
            question_id: question.question_id,
            question: question.question.clone(),
        });
        self.mode = InputMode::Confirm;
        true
    }

    pub fn close_overlays(&mut self) {
        self.editor = None;
        self.confirm = None;
        self.mode = InputMode::Normal;
    }

    // -- Flash --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}
