//! Application state and logic for the TUI.
//!
//! - [`App`] owns every mounted screen and the message channel
//! - [`AppMessage`] carries finished backend calls back to the UI task
//! - [`navigation`] holds the route table
//!
//! All state changes happen on the UI task. Backend calls run in spawned
//! tasks and report back through the channel, so nothing here is shared
//! across threads.

mod actions;
mod handlers;
mod keys;
mod messages;
pub mod navigation;

pub use messages::AppMessage;
pub use navigation::{ChatRouteParams, NavRequest, Route, Tab};

use tokio::sync::mpsc;

use crate::api::CivicClient;
use crate::config::Config;
use crate::state::{ActionsState, ChatState, ShortsState, StoriesState, StoryDetailState};

/// Main application state
pub struct App {
    pub client: CivicClient,
    pub config: Config,
    /// What is on screen
    pub route: Route,
    /// Tab screens, `None` until first focused
    pub stories: Option<StoriesState>,
    pub shorts: Option<ShortsState>,
    pub chat: Option<ChatState>,
    pub actions: Option<ActionsState>,
    /// The open story, while the detail route is shown
    pub detail: Option<StoryDetailState>,
    /// One-line status shown in the footer until the next key press
    pub status: Option<String>,
    pub should_quit: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(client: CivicClient, config: Config) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            client,
            config,
            route: Route::Tab(Tab::Stories),
            stories: None,
            shorts: None,
            chat: None,
            actions: None,
            detail: None,
            status: None,
            should_quit: false,
            needs_redraw: true,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Mount the initial tab. Must be called inside a tokio runtime.
    pub fn initialize(&mut self) {
        tracing::info!(base_url = self.client.base_url(), "starting");
        self.ensure_mounted(self.route.tab());
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
