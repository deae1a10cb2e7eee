//! A [`LoadState`] bound to one screen mount, with request sequencing.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{ApiError, FailureContext};

use super::LoadState;

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

/// Identity of one screen lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    pub fn next() -> Self {
        MountId(NEXT_MOUNT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Issued when a request starts; must be handed back with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub mount: MountId,
    pub seq: u64,
}

/// What [`Remote::resolve`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer response was already applied.
    Stale,
    /// The screen that asked is gone.
    Unmounted,
}

/// Container for a value fetched from the backend by one screen.
#[derive(Debug)]
pub struct Remote<T> {
    state: LoadState<T>,
    mount: MountId,
    issued: u64,
    applied: u64,
    mounted: bool,
}

impl<T> Remote<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            mount: MountId::next(),
            issued: 0,
            applied: 0,
            mounted: true,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn value(&self) -> Option<&T> {
        self.state.value()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// Start a request, keeping the current value for display.
    pub fn begin(&mut self) -> Ticket {
        let previous = self.state.take_value();
        self.state = LoadState::Loading { previous };
        self.issued += 1;
        Ticket {
            mount: self.mount,
            seq: self.issued,
        }
    }

    /// Start a request unless one is already in flight.
    pub fn try_begin(&mut self) -> Option<Ticket> {
        if self.state.is_loading() {
            None
        } else {
            Some(self.begin())
        }
    }

    /// Drop the current value and any error.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Apply a finished request, unless it is stale or its screen is gone.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<T, ApiError>,
        context: FailureContext,
    ) -> Resolution {
        if !self.mounted || ticket.mount != self.mount {
            tracing::debug!(seq = ticket.seq, "dropping result for unmounted screen");
            return Resolution::Unmounted;
        }
        if ticket.seq <= self.applied {
            tracing::debug!(
                seq = ticket.seq,
                applied = self.applied,
                "dropping out-of-order result"
            );
            return Resolution::Stale;
        }

        self.applied = ticket.seq;
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "request failed");
                let previous = self.state.take_value();
                LoadState::Failed {
                    message: err.user_message(context),
                    previous,
                }
            }
        };
        Resolution::Applied
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::new()
    }
}
