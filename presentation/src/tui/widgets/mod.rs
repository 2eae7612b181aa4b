//! TUI widgets: ratatui components for the feed layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Search (3) ────────────────────────────────────┤
//! ├── Alert (1) ─────────────────────────────────────┤
//! ├── Result count (1) ──────────────────────────────┤
//! ├── Question cards (flex) ─────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod alert;
pub mod confirm;
pub mod editor;
pub mod header;
pub mod help;
pub mod question_list;
pub mod search_bar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout regions computed from the terminal area
pub struct FeedLayout {
    pub header: Rect,
    pub search: Rect,
    pub alert: Rect,
    pub count: Rect,
    pub list: Rect,
    pub status_bar: Rect,
}

impl FeedLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            search: chunks[1],
            alert: chunks[2],
            count: chunks[3],
            list: chunks[4],
            status_bar: chunks[5],
        }
    }

    /// Centered overlay area for modals
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Spans for a text buffer with a visible block cursor
pub(crate) fn cursor_spans<'a>(
    text: &'a str,
    cursor: usize,
    style: ratatui::style::Style,
) -> Vec<ratatui::text::Span<'a>> {
    use ratatui::style::Modifier;
    use ratatui::text::Span;

    let (before, rest) = text.split_at(cursor.min(text.len()));
    let mut chars = rest.chars();
    let under = chars.next();
    let after = chars.as_str();

    let cursor_style = style.add_modifier(Modifier::REVERSED);
    let mut spans = vec![Span::styled(before, style)];
    match under {
        Some(c) => spans.push(Span::styled(c.to_string(), cursor_style)),
        None => spans.push(Span::styled(" ", cursor_style)),
    }
    spans.push(Span::styled(after, style));
    spans
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = FeedLayout::compute(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.search.y, 3);
        assert_eq!(layout.alert.y, 6);
        assert_eq!(layout.count.y, 7);
        assert_eq!(layout.list.y, 8);
        assert_eq!(layout.list.height, 21);
        assert_eq!(layout.status_bar.y, 29);
    }

    #[test]
    fn test_centered_overlay_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let overlay = FeedLayout::centered_overlay(60, 50, area);
        assert_eq!(overlay.width, 60);
        assert_eq!(overlay.x, 20);
    }

    #[test]
    fn test_cursor_spans_split() {
        use ratatui::style::Style;
        let spans = cursor_spans("abc", 1, Style::default());
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);

        let spans = cursor_spans("abc", 3, Style::default());
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["abc", " ", ""]);
    }
}
