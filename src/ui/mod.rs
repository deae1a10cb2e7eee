//! UI rendering for the civic TUI
//!
//! ```text
//! ┌ tab bar ─────────────────────────────┐
//! │ route screen                         │
//! │   Stories | Shorts | Chat | Actions  │
//! │   or the story detail modal          │
//! ├──────────────────────────────────────┤
//! │ status line or key hints             │
//! └──────────────────────────────────────┘
//! ```
//!
//! Rendering reads the [`App`] and never mutates it.

mod actions;
mod chat;
pub mod components;
mod helpers;
mod shorts;
mod stories;
mod story_detail;
mod tab_bar;
pub mod theme;

pub use helpers::{clamp_lines, truncate_to_width, wrap_text};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Route, Tab};

/// Render the whole frame for the current route.
pub fn render(frame: &mut Frame, app: &App) {
    let [tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(tab_bar::tab_bar_line(app.route.tab()))
            .block(Block::default().borders(Borders::BOTTOM).border_style(theme::border())),
        tabs_area,
    );

    let body = pad(body_area);
    match app.route {
        Route::Tab(Tab::Stories) => stories::render_stories(frame, body, app.stories.as_ref()),
        Route::StoryDetail => match app.detail.as_ref() {
            Some(detail) => story_detail::render_story_detail(frame, body, detail),
            None => stories::render_stories(frame, body, app.stories.as_ref()),
        },
        Route::Tab(Tab::Shorts) => shorts::render_shorts(frame, body, app.shorts.as_ref()),
        Route::Tab(Tab::Chat) => chat::render_chat(frame, body, app.chat.as_ref()),
        Route::Tab(Tab::Actions) => actions::render_actions(frame, body, app.actions.as_ref()),
    }

    frame.render_widget(Paragraph::new(footer_line(app)), footer_area);
}

fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn footer_line(app: &App) -> Line<'static> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(format!(" {}", status), theme::text()));
    }
    Line::from(Span::styled(format!(" {}", key_hints(app)), theme::muted()))
}

/// Key hints for the current route and focus.
pub fn key_hints(app: &App) -> &'static str {
    if app.input_focused() {
        return match app.route {
            Route::Tab(Tab::Chat) => "Enter send · Esc stop typing · Ctrl+E explain topic",
            _ => "Enter submit · Esc done",
        };
    }
    match app.route {
        Route::Tab(Tab::Stories) => "j/k move · Enter open · r refresh · 1-4 tabs · q quit",
        Route::StoryDetail => "Esc back · s simplify · a ask CivicCompanion · q quit",
        Route::Tab(Tab::Shorts) => "j/k move · l like · o open video · a ask · r refresh · q quit",
        Route::Tab(Tab::Chat) => "←/→ topic · i type · Ctrl+E explain topic · r reload · q quit",
        Route::Tab(Tab::Actions) => {
            "←/→ policy · i location · Enter get actions · r reload · q quit"
        }
    }
}
