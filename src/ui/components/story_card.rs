//! Story card: tag row, title and a clamped summary.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use unicode_width::UnicodeWidthStr;

use crate::models::Story;
use crate::ui::helpers::{clamp_lines, truncate_to_width};
use crate::ui::theme;

/// Tags shown on a card.
pub const MAX_CARD_TAGS: usize = 2;

/// Summary lines shown on a card.
pub const SUMMARY_LINES: usize = 3;

/// Display data for one story in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryCard<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    tags: Vec<String>,
}

impl<'a> StoryCard<'a> {
    pub fn new(story: &'a Story) -> Self {
        Self {
            title: &story.title,
            summary: &story.summary,
            tags: story
                .tags
                .iter()
                .take(MAX_CARD_TAGS)
                .map(|tag| tag.to_uppercase())
                .collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn summary_lines(&self, width: usize) -> Vec<String> {
        clamp_lines(self.summary, width, SUMMARY_LINES)
    }

    /// Lines for a card `width` columns wide, with a trailing spacer.
    pub fn to_text(&self, width: usize, selected: bool) -> Text<'static> {
        let marker = if selected { "▌ " } else { "  " };
        let inner = width.saturating_sub(marker.width());
        let marker_style = Style::default().fg(theme::COLOR_ACCENT);

        let mut lines = Vec::new();

        if !self.tags.is_empty() {
            let mut spans = vec![Span::styled(marker, marker_style)];
            for (i, tag) in self.tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    tag.clone(),
                    Style::default()
                        .fg(theme::COLOR_TAG)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(spans));
        }

        let title_style = if selected {
            theme::heading().fg(theme::COLOR_BORDER_FOCUSED)
        } else {
            theme::heading()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(truncate_to_width(self.title, inner), title_style),
        ]));

        for line in self.summary_lines(inner) {
            lines.push(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(line, theme::muted()),
            ]));
        }

        lines.push(Line::default());
        Text::from(lines)
    }
}
