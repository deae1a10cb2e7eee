//! Take-action screen state.

use crate::error::{ApiError, FailureContext};
use crate::models::{Story, TakeActionResponse};
use crate::view_state::{Remote, Resolution, Ticket};
use crate::widgets::InputBox;

pub const POLICIES_FAILURE_MESSAGE: &str = "Failed to load policies";
pub const ACTIONS_FAILURE_MESSAGE: &str = "Could not fetch suggested actions.";

#[derive(Debug)]
pub struct ActionsState {
    pub policies: Remote<Vec<Story>>,
    selected: usize,
    pub location: InputBox,
    pub location_focused: bool,
    pub result: Remote<TakeActionResponse>,
}

impl ActionsState {
    pub fn new() -> Self {
        Self {
            policies: Remote::new(),
            selected: 0,
            location: InputBox::with_placeholder("e.g., Champaign, IL"),
            location_focused: false,
            result: Remote::new(),
        }
    }

    pub fn policies(&self) -> &[Story] {
        self.policies.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.policies().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.policies().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn begin_policies(&mut self) -> Ticket {
        self.policies.begin()
    }

    pub fn resolve_policies(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Story>, ApiError>,
    ) -> Resolution {
        let outcome = self.policies.resolve(
            ticket,
            result,
            FailureContext::Fixed(POLICIES_FAILURE_MESSAGE),
        );
        if self.selected >= self.policies().len() {
            self.selected = 0;
        }
        outcome
    }

    /// Start a take-action request for the selected policy.
    ///
    /// Returns the policy id and the location (`None` when blank). The
    /// previous result is cleared. `None` while a request is in flight or
    /// when no policy is selected.
    pub fn prepare_submit(&mut self) -> Option<(Ticket, String, Option<String>)> {
        if self.result.is_loading() {
            return None;
        }
        let policy_id = self.selected_story()?.policy_id.clone();
        let location = Some(self.location.content().trim().to_string()).filter(|l| !l.is_empty());

        self.result.reset();
        let ticket = self.result.begin();
        Some((ticket, policy_id, location))
    }

    pub fn resolve_result(
        &mut self,
        ticket: Ticket,
        result: Result<TakeActionResponse, ApiError>,
    ) -> Resolution {
        self.result
            .resolve(ticket, result, FailureContext::Fixed(ACTIONS_FAILURE_MESSAGE))
    }

    pub fn unmount(&mut self) {
        self.policies.unmount();
        self.result.unmount();
    }
}

impl Default for ActionsState {
    fn default() -> Self {
        Self::new()
    }
}
