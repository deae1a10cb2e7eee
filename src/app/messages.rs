//! AppMessage enum for results posted back to the UI task.

use crate::error::CivicResult;
use crate::models::{
    ChatResponse, ExplainPolicyResponse, ReadingLevel, ShortVideo, Story, StoryDetail,
    TakeActionResponse,
};
use crate::view_state::Ticket;

/// One finished backend call. Every spawned request sends exactly one.
#[derive(Debug)]
pub enum AppMessage {
    /// `GET /stories` for the Stories tab
    StoriesLoaded {
        ticket: Ticket,
        result: CivicResult<Vec<Story>>,
    },
    /// `GET /stories/{id}` for the open detail view
    StoryDetailLoaded {
        ticket: Ticket,
        level: Option<ReadingLevel>,
        result: CivicResult<StoryDetail>,
    },
    /// `GET /shorts`
    ShortsLoaded {
        ticket: Ticket,
        result: CivicResult<Vec<ShortVideo>>,
    },
    /// `GET /stories` for the chat topic chips
    ChatTopicsLoaded {
        ticket: Ticket,
        result: CivicResult<Vec<Story>>,
    },
    /// `POST /chat`
    ChatReplied {
        ticket: Ticket,
        result: CivicResult<ChatResponse>,
    },
    /// `POST /explain-policy`
    PolicyExplained {
        ticket: Ticket,
        result: CivicResult<ExplainPolicyResponse>,
    },
    /// `GET /stories` for the actions policy chips
    PoliciesLoaded {
        ticket: Ticket,
        result: CivicResult<Vec<Story>>,
    },
    /// `POST /take-action`
    ActionsSuggested {
        ticket: Ticket,
        result: CivicResult<TakeActionResponse>,
    },
}

impl AppMessage {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::StoriesLoaded { .. } => "stories_loaded",
            AppMessage::StoryDetailLoaded { .. } => "story_detail_loaded",
            AppMessage::ShortsLoaded { .. } => "shorts_loaded",
            AppMessage::ChatTopicsLoaded { .. } => "chat_topics_loaded",
            AppMessage::ChatReplied { .. } => "chat_replied",
            AppMessage::PolicyExplained { .. } => "policy_explained",
            AppMessage::PoliciesLoaded { .. } => "policies_loaded",
            AppMessage::ActionsSuggested { .. } => "actions_suggested",
        }
    }
}
