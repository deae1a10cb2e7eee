//! Chat screen state: topic chips, the message list and the input line.
//!
//! Messages are appended, never replaced, so sends are guarded by an
//! [`InFlight`] rather than a [`Remote`]. Topics are an ordinary
//! [`Remote`] list of stories.

use serde_json::{Map, Value};

use crate::error::{ApiError, FailureContext};
use crate::models::{ChatMessage, ChatParams, ChatResponse, ExplainPolicyResponse, Story};
use crate::view_state::{InFlight, Remote, Resolution, Ticket};
use crate::widgets::InputBox;

use super::ConversationSession;

pub const EXPLAIN_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't explain that policy right now. Please try again in a moment.";

const DEFAULT_PLACEHOLDER: &str = "Ask CivicCompanion anything...";

#[derive(Debug)]
pub struct ChatState {
    pub topics: Remote<Vec<Story>>,
    selected_policy: Option<String>,
    messages: Vec<ChatMessage>,
    pub input: InputBox,
    pub input_focused: bool,
    sending: InFlight,
    conversation: ConversationSession,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            topics: Remote::new(),
            selected_policy: None,
            messages: Vec::new(),
            input: InputBox::new(),
            input_focused: false,
            sending: InFlight::new(),
            conversation: ConversationSession::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn conversation(&self) -> &ConversationSession {
        &self.conversation
    }

    pub fn is_sending(&self) -> bool {
        self.sending.is_busy()
    }

    pub fn topics(&self) -> &[Story] {
        self.topics.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_policy(&self) -> Option<&str> {
        self.selected_policy.as_deref()
    }

    /// Story whose policy is the selected topic.
    pub fn selected_story(&self) -> Option<&Story> {
        let policy = self.selected_policy.as_deref()?;
        self.topics().iter().find(|s| s.policy_id == policy)
    }

    pub fn placeholder(&self) -> String {
        match self.selected_story() {
            Some(story) => format!("Ask about \"{}\"...", story.title),
            None => DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn begin_topics(&mut self) -> Ticket {
        self.topics.begin()
    }

    /// Apply the topic list; the first policy is preselected if none is.
    pub fn resolve_topics(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Story>, ApiError>,
    ) -> Resolution {
        let outcome = self.topics.resolve(ticket, result, FailureContext::List);
        if outcome == Resolution::Applied && self.selected_story().is_none() {
            self.selected_policy = self.topics().first().map(|s| s.policy_id.clone());
        }
        outcome
    }

    fn selected_index(&self) -> Option<usize> {
        let policy = self.selected_policy.as_deref()?;
        self.topics().iter().position(|s| s.policy_id == policy)
    }

    pub fn select_next_topic(&mut self) {
        let next = match self.selected_index() {
            Some(i) if i + 1 < self.topics().len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.selected_policy = self.topics().get(next).map(|s| s.policy_id.clone());
    }

    pub fn select_prev_topic(&mut self) {
        let prev = self.selected_index().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.selected_policy = self.topics().get(prev).map(|s| s.policy_id.clone());
    }

    /// Take the input as a user message and build the `/chat` request.
    ///
    /// `None` when the input is blank or a reply is still pending; the
    /// input is left untouched in that case.
    pub fn prepare_send(&mut self) -> Option<(Ticket, ChatParams)> {
        if self.input.is_blank() || self.sending.is_busy() {
            return None;
        }
        let ticket = self.sending.try_start()?;
        let text = self.input.take().trim().to_string();
        self.messages.push(ChatMessage::user(text.clone()));

        let mut params =
            ChatParams::new(text).with_conversation_id(Some(self.conversation.id_for_request()));
        if let Some(policy) = &self.selected_policy {
            let mut metadata = Map::new();
            metadata.insert("policy_id".to_string(), Value::String(policy.clone()));
            params = params.with_metadata(metadata);
        }
        Some((ticket, params))
    }

    /// Start an explanation of the selected topic. Returns the policy id.
    pub fn prepare_explain(&mut self) -> Option<(Ticket, String)> {
        let story = self.selected_story()?;
        let prompt = format!("Explain \"{}\"", story.title);
        let policy_id = story.policy_id.clone();
        let ticket = self.sending.try_start()?;
        self.messages.push(ChatMessage::user(prompt));
        Some((ticket, policy_id))
    }

    pub fn finish_send(&mut self, ticket: Ticket, result: Result<ChatResponse, ApiError>) -> bool {
        if !self.sending.finish(ticket) {
            return false;
        }
        let message = match result {
            Ok(response) => {
                self.conversation.adopt(response.conversation_id.as_deref());
                ChatMessage::from_response(&response)
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "chat request failed");
                ChatMessage::bot_error(err.user_message(FailureContext::Conversation))
            }
        };
        self.messages.push(message);
        true
    }

    pub fn finish_explain(
        &mut self,
        ticket: Ticket,
        result: Result<ExplainPolicyResponse, ApiError>,
    ) -> bool {
        if !self.sending.finish(ticket) {
            return false;
        }
        let message = match result {
            Ok(response) => ChatMessage::bot(response.as_chat_text()),
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "explain request failed");
                ChatMessage::bot_error(
                    err.user_message(FailureContext::Fixed(EXPLAIN_FAILURE_MESSAGE)),
                )
            }
        };
        self.messages.push(message);
        true
    }

    pub fn unmount(&mut self) {
        self.topics.unmount();
        self.sending.unmount();
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
