//! Shorts feed state: active item and transient likes.

use std::collections::HashSet;

use crate::error::{ApiError, FailureContext};
use crate::models::ShortVideo;
use crate::view_state::{Remote, Resolution, Ticket};

pub const SHORTS_FAILURE_MESSAGE: &str = "Could not load shorts.";

#[derive(Debug, Default)]
pub struct ShortsState {
    pub feed: Remote<Vec<ShortVideo>>,
    active: usize,
    liked: HashSet<String>,
}

impl ShortsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shorts(&self) -> &[ShortVideo] {
        self.feed.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&ShortVideo> {
        self.shorts().get(self.active)
    }

    pub fn next(&mut self) {
        if self.active + 1 < self.shorts().len() {
            self.active += 1;
        }
    }

    pub fn prev(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    /// Toggle the like on the active short. Returns the new liked state.
    pub fn toggle_like(&mut self) -> Option<bool> {
        let id = self.active()?.id.clone();
        if self.liked.remove(&id) {
            Some(false)
        } else {
            self.liked.insert(id);
            Some(true)
        }
    }

    pub fn like_label(&self, id: &str) -> &'static str {
        if self.is_liked(id) {
            "♥ Liked"
        } else {
            "♡ Like"
        }
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.feed.begin()
    }

    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<ShortVideo>, ApiError>,
    ) -> Resolution {
        let outcome = self
            .feed
            .resolve(ticket, result, FailureContext::Fixed(SHORTS_FAILURE_MESSAGE));
        if self.active >= self.shorts().len() {
            self.active = 0;
        }
        outcome
    }
}
