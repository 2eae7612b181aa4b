//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const FEED_KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓", "Move between cards"),
    ("g/G", "First / last card"),
    ("/ or i", "Edit the search term"),
    ("Tab", "Switch answered / unanswered"),
    ("r", "Refresh"),
    ("e or Enter", "Answer the selected question"),
    ("v", "Toggle visibility"),
    ("d", "Delete question and response"),
    ("x", "Dismiss the alert"),
    ("q / Ctrl+C", "Quit"),
];

const EDITOR_KEYS: &[(&str, &str)] = &[
    ("Enter", "Save the response"),
    ("Alt+Enter / Ctrl+J", "New line"),
    ("Tab", "Toggle public / hidden"),
    ("Esc", "Cancel"),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(keys.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<20}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*desc),
            ])
        }));
        lines.push(Line::from(""));
        lines
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = Self::section("Feed", FEED_KEYS);
        lines.extend(Self::section("Response editor", EDITOR_KEYS));
        lines.push(Line::from(Span::styled(
            "Press ? or ESC to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let paragraph = Paragraph::new(Self::build_help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}
