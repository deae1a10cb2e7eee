//! Conversation identity for one chat session.

use uuid::Uuid;

/// Tracks which conversation id to send with each chat request.
///
/// A server-assigned id always wins and is reused from then on. Until the
/// server assigns one, a single `local-<uuid>` id is made on the first send
/// and reused.
#[derive(Debug, Clone, Default)]
pub struct ConversationSession {
    id: Option<String>,
    server_assigned: bool,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current id, if any request has been made yet.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_server_assigned(&self) -> bool {
        self.server_assigned
    }

    /// Id to attach to the next request.
    pub fn id_for_request(&mut self) -> String {
        self.id
            .get_or_insert_with(|| format!("local-{}", Uuid::new_v4()))
            .clone()
    }

    /// Record the id returned with a response.
    pub fn adopt(&mut self, server_id: Option<&str>) {
        let Some(server_id) = server_id.filter(|id| !id.is_empty()) else {
            return;
        };
        if self.id.as_deref() != Some(server_id) {
            tracing::debug!(conversation_id = server_id, "adopting server conversation id");
        }
        self.id = Some(server_id.to_string());
        self.server_assigned = true;
    }
}
