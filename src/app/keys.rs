//! Key bindings.
//!
//! | Where | Keys |
//! |-------|------|
//! | everywhere | `Ctrl+C` quit |
//! | no input focused | `q` quit, `1`-`4` tabs, `Tab`/`Shift+Tab` cycle tabs |
//! | Stories | `j`/`k` move, `Enter` open, `r` refresh |
//! | Story detail | `Esc` back, `s` simplify, `a` ask in chat |
//! | Shorts | `j`/`k` move, `l` like, `o` open video, `a` ask, `r` refresh |
//! | Chat | `←`/`→` topic, `i`/`Enter` type, `Enter` send, `Esc` stop typing, `Ctrl+E` explain topic |
//! | Actions | `←`/`→` policy, `i` edit location, `Enter` get actions, `r` reload policies |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::widgets::InputBox;

use super::navigation::{ChatRouteParams, NavRequest, Route, Tab};
use super::App;

/// Outcome of feeding a key to a focused input.
enum InputKey {
    Submit,
    Blur,
    Edited,
    Ignored,
}

fn edit_input(input: &mut InputBox, key: KeyEvent) -> InputKey {
    match key.code {
        KeyCode::Enter => InputKey::Submit,
        KeyCode::Esc => InputKey::Blur,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c);
            InputKey::Edited
        }
        KeyCode::Backspace => {
            input.backspace();
            InputKey::Edited
        }
        KeyCode::Delete => {
            input.delete_char();
            InputKey::Edited
        }
        KeyCode::Left => {
            input.move_cursor_left();
            InputKey::Edited
        }
        KeyCode::Right => {
            input.move_cursor_right();
            InputKey::Edited
        }
        KeyCode::Home => {
            input.move_cursor_home();
            InputKey::Edited
        }
        KeyCode::End => {
            input.move_cursor_end();
            InputKey::Edited
        }
        _ => InputKey::Ignored,
    }
}

impl App {
    /// True while keystrokes go to a text input.
    pub fn input_focused(&self) -> bool {
        match self.route {
            Route::Tab(Tab::Chat) => self.chat.as_ref().is_some_and(|c| c.input_focused),
            Route::Tab(Tab::Actions) => self.actions.as_ref().is_some_and(|a| a.location_focused),
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        self.status = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if !self.input_focused() {
            match key.code {
                KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                KeyCode::Char(c @ '1'..='4') => {
                    if let Some(tab) = Tab::from_digit(c) {
                        self.navigate(NavRequest::SwitchTab(tab));
                    }
                    return;
                }
                KeyCode::Tab => {
                    self.navigate(NavRequest::SwitchTab(self.route.tab().next()));
                    return;
                }
                KeyCode::BackTab => {
                    self.navigate(NavRequest::SwitchTab(self.route.tab().prev()));
                    return;
                }
                _ => {}
            }
        }

        match self.route {
            Route::Tab(Tab::Stories) => self.handle_stories_key(key),
            Route::StoryDetail => self.handle_detail_key(key),
            Route::Tab(Tab::Shorts) => self.handle_shorts_key(key),
            Route::Tab(Tab::Chat) => self.handle_chat_key(key),
            Route::Tab(Tab::Actions) => self.handle_actions_key(key),
        }
    }

    /// Bracketed paste goes to whichever input is focused.
    pub fn handle_paste(&mut self, text: &str) {
        let input = match self.route {
            Route::Tab(Tab::Chat) => self
                .chat
                .as_mut()
                .filter(|c| c.input_focused)
                .map(|c| &mut c.input),
            Route::Tab(Tab::Actions) => self
                .actions
                .as_mut()
                .filter(|a| a.location_focused)
                .map(|a| &mut a.location),
            _ => None,
        };
        if let Some(input) = input {
            // Single-line inputs: newlines become spaces.
            for c in text.chars() {
                input.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
            }
            self.mark_dirty();
        }
    }

    fn handle_stories_key(&mut self, key: KeyEvent) {
        let Some(stories) = self.stories.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => stories.select_next(),
            KeyCode::Char('k') | KeyCode::Up => stories.select_prev(),
            KeyCode::Char('r') => self.load_stories(),
            KeyCode::Enter => {
                if let Some(params) = stories.selected_params() {
                    self.navigate(NavRequest::OpenStory(params));
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => {
                self.navigate(NavRequest::Back)
            }
            KeyCode::Char('s') => self.simplify_story(),
            KeyCode::Char('a') => {
                self.navigate(NavRequest::OpenChat(ChatRouteParams { focus_input: true }))
            }
            _ => {}
        }
    }

    fn handle_shorts_key(&mut self, key: KeyEvent) {
        let Some(shorts) = self.shorts.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => shorts.next(),
            KeyCode::Char('k') | KeyCode::Up => shorts.prev(),
            KeyCode::Char('l') => {
                shorts.toggle_like();
            }
            KeyCode::Char('r') => self.load_shorts(),
            KeyCode::Char('o') | KeyCode::Enter => self.open_active_short(),
            KeyCode::Char('a') => {
                self.navigate(NavRequest::OpenChat(ChatRouteParams { focus_input: true }))
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('e') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.explain_selected_policy();
            return;
        }
        let Some(chat) = self.chat.as_mut() else {
            return;
        };

        if chat.input_focused {
            match edit_input(&mut chat.input, key) {
                InputKey::Submit => self.send_chat_message(),
                InputKey::Blur => chat.input_focused = false,
                InputKey::Edited | InputKey::Ignored => {}
            }
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => chat.select_prev_topic(),
            KeyCode::Right | KeyCode::Char('l') => chat.select_next_topic(),
            KeyCode::Char('i') | KeyCode::Enter => chat.input_focused = true,
            KeyCode::Char('r') => self.load_chat_topics(),
            _ => {}
        }
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        let Some(actions) = self.actions.as_mut() else {
            return;
        };

        if actions.location_focused {
            match edit_input(&mut actions.location, key) {
                InputKey::Submit => {
                    actions.location_focused = false;
                    self.submit_take_action();
                }
                InputKey::Blur => actions.location_focused = false,
                InputKey::Edited | InputKey::Ignored => {}
            }
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => actions.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => actions.select_next(),
            KeyCode::Char('i') => actions.location_focused = true,
            KeyCode::Enter => self.submit_take_action(),
            KeyCode::Char('r') => self.load_action_policies(),
            _ => {}
        }
    }
}
