//! Header widget: active filter and the query behind the displayed list

use crate::tui::state::FeedState;
use echoq_domain::Filter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a FeedState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a FeedState) -> Self {
        Self { state }
    }
}

fn filter_tab(filter: Filter, active: Filter) -> Span<'static> {
    let label = format!(" {} ", filter);
    if filter == active {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("◉ ", Style::default().fg(Color::Green))];
        for filter in Filter::all() {
            spans.push(filter_tab(filter, self.state.view_filter));
            spans.push(Span::raw(" "));
        }

        let phase_text = if self.state.is_loading() {
            "Loading...".to_string()
        } else if self.state.pending_actions > 0 {
            "Saving...".to_string()
        } else {
            match &self.state.shown_query {
                Some(query) => query.to_string(),
                None => "Ready".to_string(),
            }
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(phase_text, Style::default().fg(Color::Yellow)));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" echoq ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use echoq_application::QuestionQuery;

    fn render(state: &FeedState) -> String {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_shows_both_filters_and_ready() {
        let state = FeedState::new();
        let text = render(&state);
        assert!(text.contains("unanswered"));
        assert!(text.contains("answered"));
        assert!(text.contains("Ready"));
    }

    #[test]
    fn test_loading_wins_over_shown_query() {
        let mut state = FeedState::new();
        state.shown_query = Some(QuestionQuery::list(Filter::Answered));
        assert!(render(&state).contains("answered questions"));

        state.pending_query = Some(QuestionQuery::search("cats", Filter::Answered));
        assert!(render(&state).contains("Loading..."));
    }
}
