//! Shorts feed: a vertical list with one active item.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::state::ShortsState;
use crate::ui::components::StatusBanner;
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme;

pub const EMPTY_SHORTS_TEXT: &str = "No shorts yet.";
pub const LOADING_SHORTS_TEXT: &str = "Loading shorts...";

pub fn render_shorts(frame: &mut Frame, area: Rect, shorts: Option<&ShortsState>) {
    let Some(shorts) = shorts else {
        frame.render_widget(StatusBanner::loading(LOADING_SHORTS_TEXT), area);
        return;
    };

    if shorts.shorts().is_empty() {
        let banner = if shorts.feed.is_loading() {
            StatusBanner::loading(LOADING_SHORTS_TEXT)
        } else if let Some(error) = shorts.feed.state().error() {
            StatusBanner::error(error)
        } else {
            StatusBanner::empty(EMPTY_SHORTS_TEXT)
        };
        frame.render_widget(banner, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let active = shorts.active_index();
    let items: Vec<ListItem> = shorts
        .shorts()
        .iter()
        .enumerate()
        .map(|(i, short)| {
            let is_active = i == active;
            let marker = if is_active { "▶ " } else { "  " };
            let liked = shorts.is_liked(&short.id);
            let like_style = if liked {
                Style::default().fg(theme::COLOR_LIKE)
            } else {
                theme::muted()
            };
            let title_style = if is_active {
                theme::heading()
            } else {
                theme::text().add_modifier(Modifier::BOLD)
            };
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme::COLOR_ACCENT)),
                    Span::styled(truncate_to_width(&short.title, width), title_style),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(truncate_to_width(short.headline(), width), theme::muted()),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(shorts.like_label(&short.id), like_style),
                ]),
                Line::default(),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(active));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}
