//! Stories feed screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::state::stories::EMPTY_STORIES_TEXT;
use crate::state::StoriesState;
use crate::ui::components::{StatusBanner, StoryCard};

pub const LOADING_STORIES_TEXT: &str = "Loading stories...";

pub fn render_stories(frame: &mut Frame, area: Rect, stories: Option<&StoriesState>) {
    let Some(stories) = stories else {
        frame.render_widget(StatusBanner::loading(LOADING_STORIES_TEXT), area);
        return;
    };

    // Failed refreshes keep the previous list under the banner.
    let list_area = match stories.error_banner() {
        Some(banner) => {
            let [banner_area, rest] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
            frame.render_widget(StatusBanner::error(&banner), banner_area);
            rest
        }
        None => area,
    };

    if stories.stories().is_empty() {
        let banner = if stories.feed.is_loading() {
            StatusBanner::loading(LOADING_STORIES_TEXT)
        } else if stories.feed.state().error().is_some() {
            return;
        } else {
            StatusBanner::empty(EMPTY_STORIES_TEXT)
        };
        frame.render_widget(banner, list_area);
        return;
    }

    let width = list_area.width as usize;
    let selected = stories.selected_index();
    let items: Vec<ListItem> = stories
        .stories()
        .iter()
        .enumerate()
        .map(|(i, story)| ListItem::new(StoryCard::new(story).to_text(width, i == selected)))
        .collect();

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(List::new(items), list_area, &mut state);
}
