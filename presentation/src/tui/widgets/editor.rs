//! Response editor modal

use super::cursor_spans;
use crate::tui::state::EditDraft;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct EditorWidget<'a> {
    draft: &'a EditDraft,
}

impl<'a> EditorWidget<'a> {
    pub fn new(draft: &'a EditDraft) -> Self {
        Self { draft }
    }

    /// Split the response into lines, placing the cursor on the right one
    fn response_lines(&self) -> Vec<Line<'a>> {
        let text = self.draft.response.as_str();
        let cursor = self.draft.response.cursor;
        let mut lines = Vec::new();
        let mut start = 0;
        for segment in text.split('\n') {
            let end = start + segment.len();
            if (start..=end).contains(&cursor) {
                lines.push(Line::from(cursor_spans(segment, cursor - start, Style::default())));
            } else {
                lines.push(Line::from(segment));
            }
            start = end + 1;
        }
        lines
    }
}

impl<'a> Widget for EditorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Answer question {} ", self.draft.question_id))
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(self.draft.question.as_str())
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        Paragraph::new(self.response_lines())
            .block(Block::default().borders(Borders::TOP).title(" Response "))
            .wrap(Wrap { trim: false })
            .render(chunks[1], buf);

        let (label, color) = if self.draft.show {
            ("public", Color::Green)
        } else {
            ("hidden", Color::DarkGray)
        };
        Line::from(vec![
            Span::raw("Visibility: "),
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled("  (Tab to toggle)", Style::default().fg(Color::DarkGray)),
        ])
        .render(chunks[2], buf);
    }
}
