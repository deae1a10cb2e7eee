//! Chat screen: topic chips, message history and the input line.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::ChatState;
use crate::ui::components::{chat_bubble_lines, policy_chip_row, StatusBanner};
use crate::ui::helpers::wrap_text;
use crate::ui::theme;
use crate::widgets::InputBoxWidget;

pub const CHAT_INTRO_TEXT: &str =
    "Pick a topic with ←/→ and ask a question, or press Ctrl+E to have it explained.";
pub const THINKING_TEXT: &str = "CivicCompanion is thinking...";

pub fn render_chat(frame: &mut Frame, area: Rect, chat: Option<&ChatState>) {
    let Some(chat) = chat else {
        return;
    };

    let [chips_area, messages_area, input_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(area);

    render_topics(frame, chips_area, chat);
    render_messages(frame, messages_area, chat);

    let placeholder = chat.placeholder();
    let title = if chat.is_sending() { " Sending... " } else { " Message " };
    frame.render_widget(
        InputBoxWidget::new(&chat.input, title, chat.input_focused).placeholder(&placeholder),
        input_area,
    );
}

fn render_topics(frame: &mut Frame, area: Rect, chat: &ChatState) {
    if let Some(error) = chat.topics.state().error() {
        frame.render_widget(StatusBanner::error(error), area);
        return;
    }
    if chat.topics().is_empty() {
        if chat.topics.is_loading() {
            frame.render_widget(StatusBanner::loading("Loading topics..."), area);
        }
        return;
    }
    let selected = chat
        .selected_policy()
        .and_then(|policy| chat.topics().iter().position(|s| s.policy_id == policy));
    frame.render_widget(
        Paragraph::new(policy_chip_row(chat.topics(), selected, area.width as usize)),
        area,
    );
}

fn render_messages(frame: &mut Frame, area: Rect, chat: &ChatState) {
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    if chat.messages().is_empty() {
        for text in wrap_text(CHAT_INTRO_TEXT, width) {
            lines.push(Line::from(Span::styled(text, theme::muted())));
        }
    }
    for message in chat.messages() {
        lines.extend(chat_bubble_lines(message, width));
    }
    if chat.is_sending() {
        lines.push(Line::from(Span::styled(
            THINKING_TEXT,
            theme::muted().add_modifier(Modifier::ITALIC),
        )));
    }

    // Stick to the bottom once the history outgrows the area.
    let scroll = lines.len().saturating_sub(area.height as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
