//! Story detail screen state.
//!
//! The detail is fetched at the standard reading level on mount. A
//! simplify request refetches at [`ReadingLevel::Simple`] and replaces the
//! detail in full; once it lands the subtitle switches to the first
//! paragraph of the simplified text and simplify is disabled.

use crate::error::{ApiError, FailureContext};
use crate::models::{first_paragraph, ReadingLevel, StoryDetail};
use crate::view_state::{Remote, Resolution, Ticket};

pub const SUBTITLE_FALLBACK: &str =
    "This story explores how policy changes affect everyday people.";
pub const BODY_LOADING: &str = "Generating explanation...";
pub const BODY_EMPTY: &str = "No additional details yet. Please try again later.";

/// Route parameters for opening a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDetailParams {
    pub story_id: String,
    pub title: String,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub struct StoryDetailState {
    params: StoryDetailParams,
    pub detail: Remote<StoryDetail>,
    simplified: bool,
}

impl StoryDetailState {
    /// A fresh mount for the given story.
    pub fn new(params: StoryDetailParams) -> Self {
        Self {
            params,
            detail: Remote::new(),
            simplified: false,
        }
    }

    pub fn params(&self) -> &StoryDetailParams {
        &self.params
    }

    pub fn story_id(&self) -> &str {
        &self.params.story_id
    }

    pub fn is_simplified(&self) -> bool {
        self.simplified
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.detail.begin()
    }

    /// Start a simplify request. `None` once simplified or while a request
    /// is in flight.
    pub fn try_simplify(&mut self) -> Option<Ticket> {
        if self.simplified {
            return None;
        }
        self.detail.try_begin()
    }

    pub fn can_simplify(&self) -> bool {
        !self.simplified && !self.detail.is_loading()
    }

    pub fn resolve(
        &mut self,
        ticket: Ticket,
        level: Option<ReadingLevel>,
        result: Result<StoryDetail, ApiError>,
    ) -> Resolution {
        let succeeded = result.is_ok();
        let outcome = self.detail.resolve(ticket, result, FailureContext::List);
        if outcome == Resolution::Applied && succeeded {
            self.simplified = level == Some(ReadingLevel::Simple);
        }
        outcome
    }

    pub fn unmount(&mut self) {
        self.detail.unmount();
    }

    pub fn title(&self) -> &str {
        self.detail
            .value()
            .map(StoryDetail::title)
            .unwrap_or(self.params.title.as_str())
    }

    pub fn subtitle(&self) -> &str {
        let detail = self.detail.value();
        if self.simplified {
            if let Some(text) = detail.and_then(|d| d.detailed_summary.as_deref()) {
                return first_paragraph(text);
            }
        }
        detail.map(StoryDetail::summary).unwrap_or(SUBTITLE_FALLBACK)
    }

    pub fn body(&self) -> &str {
        if self.detail.is_loading() {
            return BODY_LOADING;
        }
        self.detail
            .value()
            .and_then(|d| d.detailed_summary.as_deref())
            .unwrap_or(BODY_EMPTY)
    }

    pub fn error(&self) -> Option<&str> {
        self.detail.state().error()
    }
}
