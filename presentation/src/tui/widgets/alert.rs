//! One-line alert banner for the current notification

use echoq_domain::Notification;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct AlertWidget<'a> {
    notification: &'a Notification,
}

impl<'a> AlertWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for AlertWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.notification.show {
            return;
        }

        let (icon, color) = if self.notification.is_error() {
            ("✗", Color::Red)
        } else {
            ("✓", Color::Green)
        };
        let style = Style::default().fg(Color::Black).bg(color);

        let line = Line::from(vec![
            Span::styled(format!(" {} ", icon), style.add_modifier(Modifier::BOLD)),
            Span::styled(self.notification.text.as_str(), style),
            Span::styled("  (x to dismiss) ", style),
        ]);

        Paragraph::new(line).style(style).render(area, buf);
    }
}
