//! The single failure type returned by every backend operation.

use crate::traits::HttpError;

use super::context::FailureContext;

/// Generic reply shown in the conversation when a request fails.
pub const CONVERSATION_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't answer that right now. Please try again in a moment.";

/// Failure of a backend operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status.
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// No response at all (connection refused, DNS, timeout, bad URL).
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// 2xx response whose body is not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request body could not be serialized.
    #[error("Invalid request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Coarse classification used for tests and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Status,
    Transport,
    Decode,
    Encode,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Status { .. } => ApiErrorKind::Status,
            ApiError::Transport(_) => ApiErrorKind::Transport,
            ApiError::Decode(_) => ApiErrorKind::Decode,
            ApiError::Encode(_) => ApiErrorKind::Encode,
        }
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Transport(_) => "E_API_TRANSPORT",
            ApiError::Decode(_) => "E_API_DECODE",
            ApiError::Encode(_) => "E_API_ENCODE",
        }
    }

    /// Message shown to the user for this failure on a screen of the given kind.
    pub fn user_message(&self, context: FailureContext) -> String {
        match context {
            FailureContext::List => match self {
                ApiError::Status { .. } => self.to_string(),
                ApiError::Transport(_) => {
                    "Unable to connect to the server. Please check your internet connection."
                        .to_string()
                }
                ApiError::Decode(_) | ApiError::Encode(_) => {
                    "Received an invalid response from the server. Please try again.".to_string()
                }
            },
            FailureContext::Fixed(message) => message.to_string(),
            FailureContext::Conversation => CONVERSATION_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> ApiError {
        ApiError::Decode(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
    }

    #[test]
    fn test_status_display_includes_code_and_body() {
        let err = ApiError::Status {
            status: 404,
            body: "Story not found.".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: Story not found.");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_status());
        assert_eq!(err.kind(), ApiErrorKind::Status);
    }

    #[test]
    fn test_transport_from_http_error() {
        let err: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.kind(), ApiErrorKind::Transport);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            ApiError::Status {
                status: 500,
                body: String::new(),
            }
            .error_code(),
            ApiError::Transport(HttpError::Other("x".to_string())).error_code(),
            decode_error().error_code(),
        ];
        assert_eq!(codes, ["E_API_STATUS", "E_API_TRANSPORT", "E_API_DECODE"]);
    }

    #[test]
    fn test_list_message_shows_raw_status_text() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.user_message(FailureContext::List), "API error 500: boom");
    }

    #[test]
    fn test_list_message_hides_decode_details() {
        let message = decode_error().user_message(FailureContext::List);
        assert!(message.contains("invalid response"));
        assert!(!message.contains("<html>"));
    }

    #[test]
    fn test_conversation_message_is_generic() {
        let err = ApiError::Status {
            status: 500,
            body: "Traceback: secret internals".to_string(),
        };
        let message = err.user_message(FailureContext::Conversation);
        assert_eq!(message, CONVERSATION_FAILURE_MESSAGE);
        assert!(!message.contains("Traceback"));
    }

    #[test]
    fn test_fixed_message() {
        let err = decode_error();
        assert_eq!(
            err.user_message(FailureContext::Fixed("Could not load shorts.")),
            "Could not load shorts."
        );
    }
}
