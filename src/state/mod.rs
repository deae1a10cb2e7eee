//! Per-screen state containers.
//!
//! - [`StoriesState`]: the story feed
//! - [`StoryDetailState`]: one opened story, with simplify
//! - [`ShortsState`]: the shorts feed and likes
//! - [`ChatState`]: topics, messages and the [`ConversationSession`]
//! - [`ActionsState`]: policy choice, location and suggested actions

pub mod actions;
pub mod chat;
pub mod conversation;
pub mod shorts;
pub mod stories;
pub mod story_detail;

pub use actions::ActionsState;
pub use chat::ChatState;
pub use conversation::ConversationSession;
pub use shorts::ShortsState;
pub use stories::StoriesState;
pub use story_detail::{StoryDetailParams, StoryDetailState};
