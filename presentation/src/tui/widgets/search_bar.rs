//! Search box widget

use super::cursor_spans;
use crate::tui::mode::InputMode;
use crate::tui::state::FeedState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SearchBarWidget<'a> {
    state: &'a FeedState,
}

impl<'a> SearchBarWidget<'a> {
    pub fn new(state: &'a FeedState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for SearchBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.mode == InputMode::Search;
        let border_style = if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let search = &self.state.search;
        let line = if focused {
            Line::from(cursor_spans(search.as_str(), search.cursor, Style::default()))
        } else if search.as_str().is_empty() {
            Line::from(Span::styled(
                "press / to search",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(search.as_str())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::TextBuffer;
    use crate::tui::widgets::buffer_text;

    fn render(state: &FeedState) -> String {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        SearchBarWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_placeholder_when_empty() {
        assert!(render(&FeedState::new()).contains("press / to search"));
    }

    #[test]
    fn test_shows_term() {
        let mut state = FeedState::new();
        state.search = TextBuffer::with_text("cats");
        assert!(render(&state).contains("cats"));
        state.mode = InputMode::Search;
        assert!(render(&state).contains("cats"));
    }
}
