//! Backend calls started from the UI.
//!
//! Each method moves its screen into the loading state, spawns one request
//! on the runtime and returns immediately. The result comes back through
//! the message channel as an [`AppMessage`].

use std::future::Future;

use crate::error::CivicResult;
use crate::models::{ExplainPolicyParams, ReadingLevel, TakeActionParams};

use super::{App, AppMessage};

impl App {
    fn spawn_request<T, Fut, F>(&self, request: Fut, into_message: F)
    where
        T: Send + 'static,
        Fut: Future<Output = CivicResult<T>> + Send + 'static,
        F: FnOnce(CivicResult<T>) -> AppMessage + Send + 'static,
    {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = request.await;
            // Receiver is gone only when the app is shutting down.
            let _ = message_tx.send(into_message(result));
        });
    }

    /// Fetch (or refresh) the Stories feed.
    pub fn load_stories(&mut self) {
        let Some(stories) = self.stories.as_mut() else {
            return;
        };
        let ticket = stories.begin_load();
        let client = self.client.clone();
        self.spawn_request(async move { client.fetch_stories().await }, move |result| {
            AppMessage::StoriesLoaded { ticket, result }
        });
    }

    /// Fetch the open story at the given reading level.
    pub fn load_story_detail(&mut self, level: Option<ReadingLevel>) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        let ticket = detail.begin_load();
        let story_id = detail.story_id().to_string();
        self.spawn_detail(ticket, story_id, level);
    }

    /// Refetch the open story in simplified form. No-op once simplified or
    /// while a request is in flight.
    pub fn simplify_story(&mut self) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        let Some(ticket) = detail.try_simplify() else {
            return;
        };
        let story_id = detail.story_id().to_string();
        self.spawn_detail(ticket, story_id, Some(ReadingLevel::Simple));
    }

    fn spawn_detail(
        &self,
        ticket: crate::view_state::Ticket,
        story_id: String,
        level: Option<ReadingLevel>,
    ) {
        let client = self.client.clone();
        self.spawn_request(
            async move { client.fetch_story_detail(&story_id, level).await },
            move |result| AppMessage::StoryDetailLoaded {
                ticket,
                level,
                result,
            },
        );
    }

    pub fn load_shorts(&mut self) {
        let Some(shorts) = self.shorts.as_mut() else {
            return;
        };
        let ticket = shorts.begin_load();
        let client = self.client.clone();
        self.spawn_request(async move { client.fetch_shorts().await }, move |result| {
            AppMessage::ShortsLoaded { ticket, result }
        });
    }

    pub fn load_chat_topics(&mut self) {
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        let ticket = chat.begin_topics();
        let client = self.client.clone();
        self.spawn_request(async move { client.fetch_stories().await }, move |result| {
            AppMessage::ChatTopicsLoaded { ticket, result }
        });
    }

    /// Send the chat input. No-op for blank input or while a reply is
    /// pending.
    pub fn send_chat_message(&mut self) {
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        let Some((ticket, params)) = chat.prepare_send() else {
            return;
        };
        let client = self.client.clone();
        self.spawn_request(async move { client.send_chat(params).await }, move |result| {
            AppMessage::ChatReplied { ticket, result }
        });
    }

    /// Ask for an explanation of the selected chat topic.
    pub fn explain_selected_policy(&mut self) {
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        let Some((ticket, policy_id)) = chat.prepare_explain() else {
            return;
        };
        let params = ExplainPolicyParams::new(policy_id)
            .with_user_role(self.config.user_role.clone())
            .with_language(self.config.language.clone());
        let client = self.client.clone();
        self.spawn_request(
            async move { client.explain_policy(params).await },
            move |result| AppMessage::PolicyExplained { ticket, result },
        );
    }

    pub fn load_action_policies(&mut self) {
        let Some(actions) = self.actions.as_mut() else {
            return;
        };
        let ticket = actions.begin_policies();
        let client = self.client.clone();
        self.spawn_request(async move { client.fetch_stories().await }, move |result| {
            AppMessage::PoliciesLoaded { ticket, result }
        });
    }

    /// Request suggested actions for the selected policy.
    pub fn submit_take_action(&mut self) {
        let Some(actions) = self.actions.as_mut() else {
            return;
        };
        let Some((ticket, policy_id, location)) = actions.prepare_submit() else {
            return;
        };
        let params = TakeActionParams::new(policy_id)
            .with_location(location)
            .with_user_role(self.config.user_role.clone());
        let client = self.client.clone();
        self.spawn_request(
            async move { client.take_action(params).await },
            move |result| AppMessage::ActionsSuggested { ticket, result },
        );
    }

    /// Open the active short's video with the system handler.
    pub fn open_active_short(&mut self) {
        let Some(short) = self.shorts.as_ref().and_then(|s| s.active()) else {
            return;
        };
        let url = self.client.resolve_media_url(&short.video_url);
        match open::that(&url) {
            Ok(()) => {
                tracing::info!(%url, "opened short");
                self.status = Some(format!("Opened {}", url));
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "failed to open short");
                self.status = Some(format!("Couldn't open video: {}", url));
            }
        }
    }
}
