//! Request bodies and the caller-facing parameter structs that produce them.
//!
//! Parameter structs leave optional fields as `None`; converting them into a
//! request substitutes the backend defaults so the wire body is always
//! complete.

use serde::Serialize;
use serde_json::{Map, Value};

/// Role sent when the caller does not specify one.
pub const DEFAULT_USER_ROLE: &str = "general";

/// Language sent when the caller does not specify one.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplainPolicyParams {
    pub policy_id: String,
    pub user_role: Option<String>,
    pub language: Option<String>,
}

impl ExplainPolicyParams {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            ..Self::default()
        }
    }

    pub fn with_user_role(mut self, role: Option<String>) -> Self {
        self.user_role = role;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}

/// Body of `POST /explain-policy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainPolicyRequest {
    pub policy_id: String,
    pub user_role: String,
    pub language: String,
}

impl From<ExplainPolicyParams> for ExplainPolicyRequest {
    fn from(params: ExplainPolicyParams) -> Self {
        Self {
            policy_id: params.policy_id,
            user_role: params
                .user_role
                .unwrap_or_else(|| DEFAULT_USER_ROLE.to_string()),
            language: params
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TakeActionParams {
    pub policy_id: String,
    pub user_location: Option<String>,
    pub user_role: Option<String>,
}

impl TakeActionParams {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            ..Self::default()
        }
    }

    /// Blank locations are treated as absent.
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.user_location = location.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn with_user_role(mut self, role: Option<String>) -> Self {
        self.user_role = role;
        self
    }
}

/// Body of `POST /take-action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TakeActionRequest {
    pub policy_id: String,
    /// Serialized as `null` when absent.
    pub user_location: Option<String>,
    pub user_role: String,
}

impl From<TakeActionParams> for TakeActionRequest {
    fn from(params: TakeActionParams) -> Self {
        Self {
            policy_id: params.policy_id,
            user_location: params.user_location,
            user_role: params
                .user_role
                .unwrap_or_else(|| DEFAULT_USER_ROLE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatParams {
    pub message: String,
    pub conversation_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl ChatParams {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_conversation_id(mut self, id: Option<String>) -> Self {
        self.conversation_id = id;
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    /// Serialized as `null` when absent.
    pub conversation_id: Option<String>,
    pub metadata: Map<String, Value>,
}

impl From<ChatParams> for ChatRequest {
    fn from(params: ChatParams) -> Self {
        Self {
            message: params.message,
            conversation_id: params.conversation_id,
            metadata: params.metadata.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explain_defaults() {
        let request = ExplainPolicyRequest::from(ExplainPolicyParams::new("p1"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"policy_id": "p1", "user_role": "general", "language": "en"})
        );
    }

    #[test]
    fn test_explain_overrides() {
        let params = ExplainPolicyParams::new("p1")
            .with_user_role(Some("student".to_string()))
            .with_language(Some("es".to_string()));
        let request = ExplainPolicyRequest::from(params);
        assert_eq!(request.user_role, "student");
        assert_eq!(request.language, "es");
    }

    #[test]
    fn test_take_action_defaults_serialize_null_location() {
        let request = TakeActionRequest::from(TakeActionParams::new("p1"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"policy_id": "p1", "user_location": null, "user_role": "general"})
        );
    }

    #[test]
    fn test_take_action_blank_location_is_null() {
        let params = TakeActionParams::new("p1").with_location(Some("   ".to_string()));
        assert!(params.user_location.is_none());

        let params = TakeActionParams::new("p1").with_location(Some("Champaign, IL".to_string()));
        assert_eq!(params.user_location.as_deref(), Some("Champaign, IL"));
    }

    #[test]
    fn test_chat_defaults() {
        let request = ChatRequest::from(ChatParams::new("hello"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"message": "hello", "conversation_id": null, "metadata": {}})
        );
    }

    #[test]
    fn test_chat_with_metadata() {
        let mut metadata = Map::new();
        metadata.insert("policy_id".to_string(), json!("p9"));
        let params = ChatParams::new("hi")
            .with_conversation_id(Some("c1".to_string()))
            .with_metadata(metadata);
        let value = serde_json::to_value(ChatRequest::from(params)).unwrap();
        assert_eq!(value["conversation_id"], "c1");
        assert_eq!(value["metadata"]["policy_id"], "p9");
    }
}
