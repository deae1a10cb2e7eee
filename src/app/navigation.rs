//! Route table and navigation for the App.
//!
//! Four tabs plus a modal story detail. Tab screens mount on first focus
//! and stay mounted. The detail view mounts when opened and unmounts when
//! closed or replaced.

use crate::state::{ActionsState, ChatState, ShortsState, StoriesState, StoryDetailParams, StoryDetailState};

use super::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Stories,
    Shorts,
    Chat,
    Actions,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Stories, Tab::Shorts, Tab::Chat, Tab::Actions];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Stories => "Stories",
            Tab::Shorts => "Shorts",
            Tab::Chat => "Chat",
            Tab::Actions => "Actions",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Stories => 0,
            Tab::Shorts => 1,
            Tab::Chat => 2,
            Tab::Actions => 3,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Tab for a `1`-`4` key.
    pub fn from_digit(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        Tab::ALL.get(n.checked_sub(1)?).copied()
    }
}

/// Parameters for the chat route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatRouteParams {
    pub focus_input: bool,
}

/// What is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tab(Tab),
    /// Modal over the Stories tab
    StoryDetail,
}

impl Route {
    /// Tab highlighted in the tab bar.
    pub fn tab(self) -> Tab {
        match self {
            Route::Tab(tab) => tab,
            Route::StoryDetail => Tab::Stories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    SwitchTab(Tab),
    OpenStory(StoryDetailParams),
    OpenChat(ChatRouteParams),
    Back,
}

impl App {
    pub fn navigate(&mut self, request: NavRequest) {
        tracing::debug!(?request, "navigate");
        match request {
            NavRequest::SwitchTab(tab) => {
                self.close_detail();
                self.show_tab(tab);
            }
            NavRequest::OpenStory(params) => {
                self.close_detail();
                self.detail = Some(StoryDetailState::new(params));
                self.route = Route::StoryDetail;
                self.load_story_detail(None);
            }
            NavRequest::OpenChat(params) => {
                self.close_detail();
                self.show_tab(Tab::Chat);
                if params.focus_input {
                    if let Some(chat) = self.chat.as_mut() {
                        chat.input_focused = true;
                    }
                }
            }
            NavRequest::Back => {
                if self.route == Route::StoryDetail {
                    self.close_detail();
                    self.route = Route::Tab(Tab::Stories);
                }
            }
        }
        self.mark_dirty();
    }

    fn show_tab(&mut self, tab: Tab) {
        self.route = Route::Tab(tab);
        self.ensure_mounted(tab);
    }

    /// Mount a tab screen on first focus and start its initial fetch.
    pub(crate) fn ensure_mounted(&mut self, tab: Tab) {
        match tab {
            Tab::Stories if self.stories.is_none() => {
                self.stories = Some(StoriesState::new());
                self.load_stories();
            }
            Tab::Shorts if self.shorts.is_none() => {
                self.shorts = Some(ShortsState::new());
                self.load_shorts();
            }
            Tab::Chat if self.chat.is_none() => {
                self.chat = Some(ChatState::new());
                self.load_chat_topics();
            }
            Tab::Actions if self.actions.is_none() => {
                let mut actions = ActionsState::new();
                if let Some(location) = &self.config.default_location {
                    actions.location.set_content(location.clone());
                }
                self.actions = Some(actions);
                self.load_action_policies();
            }
            _ => {}
        }
    }

    fn close_detail(&mut self) {
        if let Some(mut detail) = self.detail.take() {
            detail.unmount();
        }
    }
}
