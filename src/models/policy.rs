use serde::{Deserialize, Serialize};

use super::deserialize_nullable_vec;

/// Plain-language explanation from `POST /explain-policy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainPolicyResponse {
    pub policy_title: String,
    /// The backend names this field `what_is_this`.
    #[serde(alias = "what_is_this")]
    pub what_it_is: String,
    pub what_it_means_for_you: String,
    #[serde(default)]
    pub disclaimer: String,
}

impl ExplainPolicyResponse {
    /// Single block of text shown as one chat reply.
    pub fn as_chat_text(&self) -> String {
        [
            self.what_it_is.as_str(),
            self.what_it_means_for_you.as_str(),
            self.disclaimer.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

/// Suggested next steps from `POST /take-action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeActionResponse {
    pub policy_title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub actions: Vec<String>,
    #[serde(default)]
    pub disclaimer: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
