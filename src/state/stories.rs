//! Stories feed screen state.

use crate::error::{ApiError, FailureContext};
use crate::models::Story;
use crate::view_state::{Remote, Resolution, Ticket};

use super::StoryDetailParams;

pub const EMPTY_STORIES_TEXT: &str = "No stories yet.";

#[derive(Debug, Default)]
pub struct StoriesState {
    pub feed: Remote<Vec<Story>>,
    selected: usize,
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stories(&self) -> &[Story] {
        self.feed.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.stories().get(self.selected)
    }

    /// Route parameters for opening the selected story.
    pub fn selected_params(&self) -> Option<StoryDetailParams> {
        self.selected_story().map(|story| StoryDetailParams {
            story_id: story.id.clone(),
            title: story.title.clone(),
            image_url: story.image_url.clone(),
        })
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.stories().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Start a mount fetch or refresh.
    pub fn begin_load(&mut self) -> Ticket {
        self.feed.begin()
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<Story>, ApiError>) -> Resolution {
        let outcome = self.feed.resolve(ticket, result, FailureContext::List);
        let len = self.stories().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        outcome
    }

    /// Inline banner text for a failed load.
    pub fn error_banner(&self) -> Option<String> {
        self.feed
            .state()
            .error()
            .map(|message| format!("Couldn't load stories: {}", message))
    }

    /// True once a load finished with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.feed.is_loading() && self.stories().is_empty()
    }
}
