//! Tab bar: brand plus the four tabs, `▶` marking the active one.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::Tab;
use crate::ui::theme;

pub const BRAND: &str = "CivicCompanion";

pub fn tab_bar_line(active: Tab) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", BRAND),
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", theme::border()),
    ];

    for tab in Tab::ALL {
        let label = format!("{} {}", tab.index() + 1, tab.label());
        if tab == active {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(theme::COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(label, theme::heading()));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label, theme::muted()));
        }
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}
