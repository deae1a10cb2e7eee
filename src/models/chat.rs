use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::deserialize_nullable_vec;

/// A document the assistant drew on for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Reply from `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub intent: String,
    pub answer: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub sources: Vec<Source>,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tools_used: Vec<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Kept as text: the backend emits naive UTC timestamps without an offset.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ChatResponse {
    /// Parse `timestamp`, accepting RFC 3339 or a naive ISO-8601 UTC value.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A message in the in-memory conversation history.
///
/// Created locally on send/receive and dropped with the chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub intent: Option<String>,
    pub sources: Option<Vec<Source>>,
    pub tools_used: Option<Vec<String>>,
    pub is_error: bool,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            intent: None,
            sources: None,
            tools_used: None,
            is_error: false,
        }
    }

    /// A message typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// A plain bot message with no chat metadata.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    /// A bot message built from a `/chat` reply.
    pub fn from_response(response: &ChatResponse) -> Self {
        let mut message = Self::new(Sender::Bot, response.answer.clone());
        if !response.intent.is_empty() {
            message.intent = Some(response.intent.clone());
        }
        if !response.sources.is_empty() {
            message.sources = Some(response.sources.clone());
        }
        if !response.tools_used.is_empty() {
            message.tools_used = Some(response.tools_used.clone());
        }
        message
    }

    /// A synthetic bot message standing in for a failed request.
    pub fn bot_error(text: impl Into<String>) -> Self {
        let mut message = Self::new(Sender::Bot, text);
        message.is_error = true;
        message
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
