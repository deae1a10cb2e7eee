//! Message handling for the App.

use crate::view_state::Resolution;

use super::{App, AppMessage};

impl App {
    /// Route a finished request to the screen that asked for it.
    ///
    /// Results for screens that are no longer mounted, or that lost a race
    /// with a newer request, are dropped by the screen's own container.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        let kind = msg.kind();
        let applied = match msg {
            AppMessage::StoriesLoaded { ticket, result } => self
                .stories
                .as_mut()
                .map(|s| s.resolve(ticket, result) == Resolution::Applied),
            AppMessage::StoryDetailLoaded {
                ticket,
                level,
                result,
            } => self
                .detail
                .as_mut()
                .map(|d| d.resolve(ticket, level, result) == Resolution::Applied),
            AppMessage::ShortsLoaded { ticket, result } => self
                .shorts
                .as_mut()
                .map(|s| s.resolve(ticket, result) == Resolution::Applied),
            AppMessage::ChatTopicsLoaded { ticket, result } => self
                .chat
                .as_mut()
                .map(|c| c.resolve_topics(ticket, result) == Resolution::Applied),
            AppMessage::ChatReplied { ticket, result } => {
                self.chat.as_mut().map(|c| c.finish_send(ticket, result))
            }
            AppMessage::PolicyExplained { ticket, result } => {
                self.chat.as_mut().map(|c| c.finish_explain(ticket, result))
            }
            AppMessage::PoliciesLoaded { ticket, result } => self
                .actions
                .as_mut()
                .map(|a| a.resolve_policies(ticket, result) == Resolution::Applied),
            AppMessage::ActionsSuggested { ticket, result } => self
                .actions
                .as_mut()
                .map(|a| a.resolve_result(ticket, result) == Resolution::Applied),
        };

        match applied {
            Some(applied) => tracing::debug!(message = kind, applied, "handled message"),
            None => tracing::debug!(message = kind, "no screen mounted for message"),
        }
    }
}
