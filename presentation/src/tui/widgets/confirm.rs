//! Delete confirmation modal

use crate::tui::state::PendingDelete;
use echoq_domain::{core::text::single_line, truncate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct ConfirmWidget<'a> {
    pending: &'a PendingDelete,
}

impl<'a> ConfirmWidget<'a> {
    pub fn new(pending: &'a PendingDelete) -> Self {
        Self { pending }
    }
}

impl<'a> Widget for ConfirmWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Delete this question and its response?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(truncate(&single_line(&self.pending.question), 120)),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Red)),
                Span::raw(": delete   "),
                Span::styled("n", Style::default().fg(Color::Green)),
                Span::raw(": keep"),
            ]),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Delete question {} ", self.pending.question_id))
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use echoq_domain::QuestionId;

    #[test]
    fn test_renders_question_and_choices() {
        let pending = PendingDelete {
            question_id: QuestionId(7),
            question: "Is this spam?".to_string(),
        };
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        ConfirmWidget::new(&pending).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Delete question 7"));
        assert!(text.contains("Is this spam?"));
        assert!(text.contains("y: delete"));
    }
}
