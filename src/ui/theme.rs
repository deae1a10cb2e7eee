//! Color theme for the civic UI.
//!
//! A small dark palette with one brand accent.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Brand accent, used for the selected tab, chips and the cursor
pub const COLOR_ACCENT: Color = Color::Rgb(37, 99, 235); // blue #2563EB

pub const COLOR_BACKGROUND: Color = Color::Black;

pub const COLOR_BORDER: Color = Color::DarkGray;

pub const COLOR_BORDER_FOCUSED: Color = Color::Rgb(96, 165, 250);

pub const COLOR_HEADER: Color = Color::White;

pub const COLOR_TEXT: Color = Color::Gray;

/// Secondary text (summaries, placeholders, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_TAG: Color = Color::Rgb(251, 191, 36); // amber

pub const COLOR_ERROR: Color = Color::Rgb(239, 68, 68);

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

pub const COLOR_LIKE: Color = Color::Rgb(244, 63, 94);

// ============================================================================
// Chat
// ============================================================================

pub const COLOR_USER_BUBBLE: Color = Color::Rgb(30, 58, 138);

pub const COLOR_BOT_BUBBLE: Color = Color::Rgb(31, 41, 55);

// ============================================================================
// Styles
// ============================================================================

pub fn text() -> Style {
    Style::default().fg(COLOR_TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(COLOR_DIM)
}

pub fn heading() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(COLOR_ERROR)
}

pub fn border() -> Style {
    Style::default().fg(COLOR_BORDER)
}

pub fn border_focused() -> Style {
    Style::default().fg(COLOR_BORDER_FOCUSED)
}

/// Selected chip, tab or list row.
pub fn selected() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD)
}
