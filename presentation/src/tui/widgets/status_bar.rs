//! Status bar widget: mode indicator with key hints or a flash message

use crate::tui::mode::InputMode;
use crate::tui::state::FeedState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a FeedState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a FeedState) -> Self {
        Self { state }
    }

    fn hints(mode: InputMode) -> &'static str {
        match mode {
            InputMode::Normal => "/:search  Tab:filter  e:answer  v:visibility  d:delete  ?:help  q:quit",
            InputMode::Search => "type to search  Enter/Esc:done  Ctrl+U:clear",
            InputMode::Edit => "Enter:save  Alt+Enter:newline  Tab:visibility  Esc:cancel",
            InputMode::Confirm => "y:delete  n:keep",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mode_line = Line::from(Span::styled(format!(" {} ", mode_text), mode_style));
        let mode_width = mode_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &mode_line, mode_width);

        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => Self::hints(mode).to_string(),
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            let right_line = Line::from(Span::styled(right_text, bg_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
