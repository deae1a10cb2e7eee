//! Where a failure surfaces, which decides how much of it the user sees.

/// Screen-side context used to turn an [`ApiError`](super::ApiError) into
/// user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureContext {
    /// List loads: the error text itself may be shown after the list's
    /// own prefix.
    List,
    /// A fixed message, regardless of the underlying failure.
    Fixed(&'static str),
    /// Conversational replies: always generic, never the raw error.
    Conversation,
}
