//! Inline status banner for loading, empty and error states.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Loading,
    Empty,
    Error,
}

impl BannerKind {
    fn icon(self) -> &'static str {
        match self {
            BannerKind::Loading => "◌",
            BannerKind::Empty => "○",
            BannerKind::Error => "✗",
        }
    }

    fn style(self) -> Style {
        match self {
            BannerKind::Loading => Style::default().fg(theme::COLOR_BORDER_FOCUSED),
            BannerKind::Empty => theme::muted(),
            BannerKind::Error => theme::error().add_modifier(Modifier::BOLD),
        }
    }
}

/// A one-message banner. Long text wraps.
#[derive(Debug, Clone)]
pub struct StatusBanner<'a> {
    kind: BannerKind,
    message: &'a str,
}

impl<'a> StatusBanner<'a> {
    pub fn new(kind: BannerKind, message: &'a str) -> Self {
        Self { kind, message }
    }

    pub fn loading(message: &'a str) -> Self {
        Self::new(BannerKind::Loading, message)
    }

    pub fn empty(message: &'a str) -> Self {
        Self::new(BannerKind::Empty, message)
    }

    pub fn error(message: &'a str) -> Self {
        Self::new(BannerKind::Error, message)
    }

    pub fn line(&self) -> Line<'static> {
        let style = self.kind.style();
        Line::from(vec![
            Span::styled(format!("{} ", self.kind.icon()), style),
            Span::styled(self.message.to_string(), style),
        ])
    }
}

impl Widget for StatusBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
