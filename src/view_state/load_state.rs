//! Tagged load status for a single fetched value.

/// Where a fetched value is in its lifecycle.
///
/// `Loading` and `Failed` keep the last shown value so a refresh or a
/// failed retry does not blank the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading {
        previous: Option<T>,
    },
    Loaded(T),
    Failed {
        message: String,
        previous: Option<T>,
    },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    /// The value to display, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { previous } | LoadState::Failed { previous, .. } => {
                previous.as_ref()
            }
            LoadState::Loaded(value) => Some(value),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// User-facing failure message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Move the current value out, leaving `Idle`.
    pub(crate) fn take_value(&mut self) -> Option<T> {
        match std::mem::take(self) {
            LoadState::Idle => None,
            LoadState::Loading { previous } | LoadState::Failed { previous, .. } => previous,
            LoadState::Loaded(value) => Some(value),
        }
    }
}
