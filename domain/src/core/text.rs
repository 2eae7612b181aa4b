//! Text helpers for rendering question and response content.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe)
///
/// The cut always lands on a character boundary, so the result may be a
/// few bytes shorter than `max_len`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Collapse all runs of whitespace (newlines included) into single spaces.
///
/// Used for one-line previews of multi-line questions.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
