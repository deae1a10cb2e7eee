//! Policy chip row.
//!
//! One chip per story, the selected one highlighted. Chips that do not fit
//! are scrolled so the selection stays visible.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::models::Story;
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme;

/// Longest chip label before truncation.
const MAX_CHIP_WIDTH: usize = 28;

fn chip_label(story: &Story) -> String {
    format!(" {} ", truncate_to_width(&story.title, MAX_CHIP_WIDTH))
}

/// Build the chip row for `width` columns.
pub fn policy_chip_row(stories: &[Story], selected: Option<usize>, width: usize) -> Line<'static> {
    let labels: Vec<String> = stories.iter().map(chip_label).collect();

    // Skip leading chips until the selected one fits.
    let mut first = 0;
    if let Some(sel) = selected {
        while first < sel {
            let used: usize = labels[first..=sel].iter().map(|l| l.width() + 1).sum();
            if used <= width {
                break;
            }
            first += 1;
        }
    }

    let mut spans = Vec::new();
    if first > 0 {
        spans.push(Span::styled("‹ ", theme::muted()));
    }
    for (i, label) in labels.into_iter().enumerate().skip(first) {
        let style = if Some(i) == selected {
            theme::selected()
        } else {
            theme::text().bg(theme::COLOR_BOT_BUBBLE)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
