//! Story detail view.
//!
//! Title, subtitle and body come from [`StoryDetailState`], which already
//! applies the fallbacks; this module only lays them out.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::StoryDetailState;
use crate::ui::components::StatusBanner;
use crate::ui::theme;

pub const SIMPLIFIED_BADGE: &str = "Simplified";

pub fn render_story_detail(frame: &mut Frame, area: Rect, detail: &StoryDetailState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused())
        .title(Span::styled(" Story ", theme::heading()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut header = vec![Line::from(Span::styled(
        detail.title().to_string(),
        theme::heading(),
    ))];
    if detail.is_simplified() {
        header.push(Line::from(Span::styled(
            format!("[{}]", SIMPLIFIED_BADGE),
            theme::selected(),
        )));
    }
    header.push(Line::from(Span::styled(
        detail.subtitle().to_string(),
        theme::muted().add_modifier(Modifier::ITALIC),
    )));
    if let Some(url) = &detail.params().image_url {
        header.push(Line::from(Span::styled(format!("Image: {}", url), theme::muted())));
    }

    let header_height = wrapped_height(&header, inner.width);
    let error_height = u16::from(detail.error().is_some()) * 2;
    let [header_area, error_area, body_area] = Layout::vertical([
        Constraint::Length(header_height + 1),
        Constraint::Length(error_height),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: true }),
        header_area,
    );
    if let Some(error) = detail.error() {
        frame.render_widget(StatusBanner::error(error), error_area);
    }

    let body_style = if detail.detail.is_loading() {
        theme::muted().add_modifier(Modifier::ITALIC)
    } else {
        theme::text()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(detail.body().to_string(), body_style))
            .wrap(Wrap { trim: false }),
        body_area,
    );
}

/// Rows needed for `lines` at `width`, counting each line's wrap.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1) as u16)
        .sum()
}
