//! Chat bubble rendering.
//!
//! A bubble is pre-wrapped to the available width so the chat screen can
//! compute its scroll offset from the line count.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::ChatMessage;
use crate::ui::helpers::{truncate_to_width, wrap_text};
use crate::ui::theme;

pub const USER_LABEL: &str = "You";
pub const BOT_LABEL: &str = "CivicCompanion";

/// Bubbles use at most this share of the width (percent).
const BUBBLE_WIDTH_PERCENT: usize = 80;

/// Lines for one message, followed by a blank separator line.
pub fn chat_bubble_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100).max(10).min(width);
    let text_width = bubble_width.saturating_sub(2);

    let (label, alignment, bg) = if message.is_user() {
        (USER_LABEL, Alignment::Right, theme::COLOR_USER_BUBBLE)
    } else {
        (BOT_LABEL, Alignment::Left, theme::COLOR_BOT_BUBBLE)
    };
    let body_style = if message.is_error {
        theme::error().bg(bg)
    } else {
        Style::default().fg(theme::COLOR_HEADER).bg(bg)
    };

    let mut lines = vec![Line::from(Span::styled(
        label,
        theme::muted().add_modifier(Modifier::BOLD),
    ))
    .alignment(alignment)];

    for text in wrap_text(&message.text, text_width) {
        lines.push(Line::from(Span::styled(format!(" {} ", text), body_style)).alignment(alignment));
    }

    if let Some(sources) = message.sources.as_ref().filter(|s| !s.is_empty()) {
        lines.push(Line::from(Span::styled("Sources:", theme::muted())).alignment(alignment));
        for source in sources {
            let entry = truncate_to_width(&format!("• {}", source.title), text_width);
            lines.push(Line::from(Span::styled(entry, theme::muted())).alignment(alignment));
        }
    }

    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_user_bubble_right_aligned() {
        let lines = chat_bubble_lines(&ChatMessage::user("hello"), 40);
        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(plain(&lines), vec!["You", " hello ", ""]);
    }

    #[test]
    fn test_bot_bubble_wraps() {
        let message = ChatMessage::bot("one two three four five six");
        let lines = chat_bubble_lines(&message, 15);
        // 15 * 80% = 12 columns, 10 for text
        let text = plain(&lines);
        assert_eq!(text[0], BOT_LABEL);
        assert_eq!(text[1], " one two ");
        assert_eq!(lines[1].alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_error_bubble_styled_as_error() {
        let lines = chat_bubble_lines(&ChatMessage::bot_error("Sorry"), 40);
        assert_eq!(lines[1].spans[0].style.fg, Some(theme::COLOR_ERROR));
    }

    #[test]
    fn test_sources_listed() {
        let mut message = ChatMessage::bot("answer");
        message.sources = Some(vec![Source {
            title: "Budget Act".to_string(),
            snippet: String::new(),
            url: None,
        }]);
        let text = plain(&chat_bubble_lines(&message, 40));
        assert!(text.contains(&"Sources:".to_string()));
        assert!(text.contains(&"• Budget Act".to_string()));
    }
}
