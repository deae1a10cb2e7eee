//! Error handling for backend operations.
//!
//! Every transport call returns [`CivicResult`]. Screens never show an
//! [`ApiError`] directly; they ask it for a user message in a
//! [`FailureContext`]:
//!
//! | Context | Status error | Transport error | Decode error |
//! |---------|--------------|-----------------|--------------|
//! | List | raw `API error <code>: <body>` | generic connection text | generic invalid-response text |
//! | Fixed | fixed text | fixed text | fixed text |
//! | Conversation | generic apology | generic apology | generic apology |

mod api_error;
mod context;

pub use api_error::{ApiError, ApiErrorKind, CONVERSATION_FAILURE_MESSAGE};
pub use context::FailureContext;

/// Result type for backend operations.
pub type CivicResult<T> = Result<T, ApiError>;
