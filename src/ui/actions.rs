//! Take-action screen: policy chips, location input and the result card.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::ActionsState;
use crate::ui::components::{policy_chip_row, StatusBanner};
use crate::ui::theme;
use crate::widgets::InputBoxWidget;

pub const ACTIONS_PROMPT_TEXT: &str =
    "Choose a policy, optionally add your location, then press Enter for suggested actions.";
pub const FINDING_ACTIONS_TEXT: &str = "Finding actions...";

pub fn render_actions(frame: &mut Frame, area: Rect, actions: Option<&ActionsState>) {
    let Some(actions) = actions else {
        return;
    };

    let [chips_area, location_area, result_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    if let Some(error) = actions.policies.state().error() {
        frame.render_widget(StatusBanner::error(error), chips_area);
    } else if actions.policies().is_empty() {
        if actions.policies.is_loading() {
            frame.render_widget(StatusBanner::loading("Loading policies..."), chips_area);
        }
    } else {
        frame.render_widget(
            Paragraph::new(policy_chip_row(
                actions.policies(),
                Some(actions.selected_index()),
                chips_area.width as usize,
            )),
            chips_area,
        );
    }

    frame.render_widget(
        InputBoxWidget::new(&actions.location, " Location (optional) ", actions.location_focused),
        location_area,
    );

    render_result(frame, result_area, actions);
}

fn render_result(frame: &mut Frame, area: Rect, actions: &ActionsState) {
    if actions.result.is_loading() {
        frame.render_widget(StatusBanner::loading(FINDING_ACTIONS_TEXT), area);
        return;
    }
    if let Some(error) = actions.result.state().error() {
        frame.render_widget(StatusBanner::error(error), area);
        return;
    }
    let Some(result) = actions.result.value() else {
        frame.render_widget(
            Paragraph::new(Span::styled(ACTIONS_PROMPT_TEXT, theme::muted()))
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    };

    let mut lines = Vec::with_capacity(result.actions.len() + 2);
    for (i, action) in result.actions.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), theme::heading()),
            Span::styled(action.clone(), theme::text()),
        ]));
    }
    if !result.disclaimer.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            result.disclaimer.clone(),
            theme::muted().add_modifier(Modifier::ITALIC),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(format!(" {} ", result.policy_title), theme::heading()));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
