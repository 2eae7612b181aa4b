//! Question card list

use crate::output::console::local_timestamp;
use crate::tui::state::FeedState;
use echoq_application::QuestionQuery;
use echoq_domain::{Question, core::text::single_line, truncate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

/// Card header plus a one-line preview
fn card(question: &Question, width: u16) -> ListItem<'static> {
    let visibility_style = if question.show {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let header = Line::from(vec![
        Span::styled(
            format!("#{} ", question.order),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", question.question_id),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(question.visibility_label(), visibility_style),
        Span::raw("  "),
        Span::styled(
            local_timestamp(&question.asked_at),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let preview_width = (width as usize).saturating_sub(4).max(8);
    let preview = Line::from(format!(
        "  {}",
        truncate(&single_line(&question.question), preview_width)
    ));

    ListItem::new(vec![header, preview, Line::raw("")])
}

pub struct QuestionListWidget<'a> {
    state: &'a FeedState,
}

impl<'a> QuestionListWidget<'a> {
    pub fn new(state: &'a FeedState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for QuestionListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Refetches after an action can show a list other than the view filter
        let shown_filter = self
            .state
            .shown_query
            .as_ref()
            .map(QuestionQuery::filter)
            .unwrap_or(self.state.view_filter);
        let title = format!(" {} ", shown_filter);
        let block = Block::default().borders(Borders::ALL).title(title);

        if self.state.questions.is_empty() {
            let text = if self.state.is_loading() {
                "Loading..."
            } else {
                "No questions"
            };
            Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .questions
            .iter()
            .map(|q| card(q, area.width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▌");

        let mut list_state = ListState::default().with_selected(Some(self.state.selected));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use chrono::Utc;
    use echoq_domain::{Filter, QuestionId};

    fn render(state: &FeedState) -> String {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        QuestionListWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_empty_list() {
        assert!(render(&FeedState::new()).contains("No questions"));
    }

    #[test]
    fn test_cards_show_id_visibility_and_preview() {
        let mut state = FeedState::new();
        state.set_questions(vec![
            Question::new(1, QuestionId(42), "What\nis love?", true, Utc::now()),
            Question::new(2, QuestionId(43), "Second", false, Utc::now()),
        ]);
        let text = render(&state);
        assert!(text.contains("#1"));
        assert!(text.contains("[42]"));
        assert!(text.contains("public"));
        assert!(text.contains("What is love?"));
        assert!(text.contains("hidden"));
    }

    #[test]
    fn test_title_follows_displayed_list() {
        let mut state = FeedState::new();
        assert!(render(&state).contains(" unanswered "));

        // a visibility toggle refetches answered without changing the view filter
        state.shown_query = Some(QuestionQuery::list(Filter::Answered));
        state.set_questions(vec![Question::new(1, QuestionId(42), "q", true, Utc::now())]);
        assert_eq!(state.view_filter, Filter::Unanswered);
        let text = render(&state);
        assert!(text.contains(" answered "));
        assert!(!text.contains("unanswered"));
    }
}
